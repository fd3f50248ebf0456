//! Main linter entry point.

use rustc_hash::FxHashSet;
use sarto_atelier_core::{CvaDefinition, SchemaError};

use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, LintSummary};
use crate::rule::{Preset, RuleRegistry};

/// Lint result for a single definition
#[derive(Debug, Clone)]
pub struct LintResult {
    /// Where the definition came from
    pub filename: String,
    /// Collected diagnostics
    pub diagnostics: Vec<LintDiagnostic>,
    /// Number of errors
    pub error_count: usize,
    /// Number of warnings
    pub warning_count: usize,
}

impl LintResult {
    /// Check if there are any errors
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Check if there are any diagnostics
    #[inline]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Main linter struct.
pub struct Linter {
    registry: RuleRegistry,
    /// Optional set of enabled rule names (if None, all rules are enabled)
    enabled_rules: Option<FxHashSet<String>>,
}

impl Linter {
    /// Create a new linter with recommended rules
    #[inline]
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::with_recommended())
    }

    /// Create a linter with every rule `preset` enables
    #[inline]
    pub fn with_preset(preset: Preset) -> Self {
        Self::with_registry(RuleRegistry::with_preset(preset))
    }

    /// Create a linter with a custom rule registry
    #[inline]
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            enabled_rules: None,
        }
    }

    /// Set enabled rules (if None, all rules are enabled)
    ///
    /// Rules not in the list are skipped.
    #[inline]
    pub fn with_enabled_rules(mut self, rules: Option<Vec<String>>) -> Self {
        self.enabled_rules = rules.map(|r| r.into_iter().collect());
        self
    }

    /// Check if a rule is enabled
    #[inline]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        match &self.enabled_rules {
            Some(set) => set.contains(rule_name),
            None => true,
        }
    }

    /// Lint a definition built in code.
    pub fn lint(&self, definition: &CvaDefinition, filename: &str) -> LintResult {
        let mut ctx = LintContext::new();
        for rule in self.registry.rules() {
            if self.is_rule_enabled(rule.meta().name) {
                rule.check(&mut ctx, definition);
            }
        }

        let diagnostics = ctx.into_diagnostics();
        let mut summary = LintSummary::default();
        for diagnostic in &diagnostics {
            summary.add(diagnostic);
        }

        LintResult {
            filename: filename.to_string(),
            diagnostics,
            error_count: summary.error_count,
            warning_count: summary.warning_count,
        }
    }

    /// Decode a JSON definition, then lint it.
    pub fn lint_source(&self, source: &str, filename: &str) -> Result<LintResult, SchemaError> {
        let definition = CvaDefinition::from_json(source)?;
        Ok(self.lint(&definition, filename))
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarto_atelier_core::{CompoundVariant, VariantSchema};

    fn sloppy() -> CvaDefinition {
        CvaDefinition::new(
            "btn btn",
            VariantSchema::new()
                .variant("size", [("sm", "px-2"), ("lg", "px-6")])
                .compound(CompoundVariant::new().when("size", "xl").class("text-xl"))
                .default_variant("size", "md"),
        )
    }

    #[test]
    fn test_recommended_preset() {
        let result = Linter::new().lint(&sloppy(), "button.json");
        let rules: Vec<_> = result.diagnostics.iter().map(|d| d.rule_name).collect();
        assert_eq!(
            rules,
            ["schema/no-unknown-default", "schema/no-unknown-compound-option"]
        );
        assert_eq!(result.error_count, 1);
        assert_eq!(result.warning_count, 1);
        assert!(result.has_errors());
    }

    #[test]
    fn test_all_preset() {
        let result = Linter::with_preset(Preset::All).lint(&sloppy(), "button.json");
        assert_eq!(result.diagnostics.len(), 4);
        assert_eq!(result.warning_count, 3);
    }

    #[test]
    fn test_enabled_rules() {
        let linter = Linter::with_preset(Preset::All)
            .with_enabled_rules(Some(vec!["schema/no-duplicate-class".to_string()]));
        let result = linter.lint(&sloppy(), "button.json");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].path, "base");
    }

    #[test]
    fn test_lint_source_rejects_non_object() {
        let err = Linter::new().lint_source("[1, 2]", "bad.json").unwrap_err();
        assert!(matches!(err, SchemaError::NotAnObject));
    }

    #[test]
    fn test_clean_definition() {
        let result = Linter::new()
            .lint_source(
                r#"{"base":"btn","variants":{"$size":{"sm":"px-2"}},"defaultVariants":{"$size":"sm"}}"#,
                "ok.json",
            )
            .unwrap();
        assert!(!result.has_diagnostics());
    }
}
