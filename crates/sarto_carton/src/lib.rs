//! Carton - The tailor's toolbox for Sarto.
//!
//! This crate provides the foundational utilities and data structures shared by
//! every Sarto crate, much like a carton (artist's portfolio case) holds the
//! essential tools and materials needed for the work.
//!
//! # Modules
//!
//! - **Record**: a small insertion-ordered map used for props and inline styles
//! - **DOM tables**: known HTML/SVG element names and void elements
//! - **General**: string helpers shared by the renderers and adapters
//!
//! # Example
//!
//! ```
//! use sarto_carton::Record;
//!
//! let mut style: Record<&str> = Record::new();
//! style.insert("color", "red");
//! style.insert("fontSize", "12px");
//! style.insert("color", "blue");
//!
//! // Replacing a key keeps its original position.
//! let keys: Vec<_> = style.keys().collect();
//! assert_eq!(keys, ["color", "fontSize"]);
//! assert_eq!(style.get("color"), Some(&"blue"));
//! ```

pub mod dom_tag_config;
pub mod general;
mod record;

pub use record::Record;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;

// Re-export smallvec for stack-optimized collections
pub use smallvec::{smallvec, SmallVec};

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

// Re-export phf for compile-time perfect hash functions
pub use phf::{phf_set, Set as PhfSet};

// Lazily-initialized statics (per-framework default factories)
pub use once_cell::sync::Lazy;

// Re-export shared utilities
pub use dom_tag_config::*;
pub use general::*;
