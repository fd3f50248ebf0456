//! # sarto_patina
//!
//! Patina - The quality checker for Sarto.
//! Linter for variant schemas.
//!
//! ## Name Origin
//!
//! **Patina** (/ˈpætɪnə/) is the layer that forms on bronze and copper over
//! time; collectors read it as a mark of authenticity. `sarto_patina` reads
//! a variant schema and reports the mistakes that the permissive resolver
//! would otherwise swallow at render time.
//!
//! ## Usage
//!
//! ```rust
//! use sarto_patina::{format_results, Linter, OutputFormat};
//!
//! let linter = Linter::new();
//! let result = linter
//!     .lint_source(r#"{"defaultVariants":{"$size":"sm"}}"#, "button.json")
//!     .unwrap();
//!
//! assert!(result.has_errors());
//! let output = format_results(&[result], OutputFormat::Text);
//! assert!(output.contains("schema/no-unknown-default"));
//! ```
//!
//! ## Rules
//!
//! ### Recommended
//! - `schema/no-unknown-default` - Defaults must name a declared group and option
//! - `schema/no-unknown-compound-group` - Compound predicates should test declared groups
//! - `schema/no-unknown-compound-option` - Compound predicates should expect declared options
//! - `schema/no-empty-compound` - Compound rules need predicates and classes
//!
//! ### All
//! - `schema/prefer-transient-group` - Group names should start with `$`
//! - `schema/no-duplicate-class` - No repeated tokens within a class string

pub mod context;
pub mod diagnostic;
pub mod linter;
pub mod output;
pub mod rule;
pub mod rules;

pub use context::LintContext;
pub use diagnostic::{LintDiagnostic, LintSummary, Severity};
pub use linter::{LintResult, Linter};
pub use output::{format_results, format_summary, format_text, OutputFormat};
pub use rule::{Preset, Rule, RuleMeta, RuleRegistry};
