//! Rule trait and registry for schema lint rules.

use sarto_atelier_core::CvaDefinition;
use serde::{Deserialize, Serialize};

use crate::context::LintContext;
use crate::diagnostic::Severity;

/// Which rule set a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Problems that are almost certainly mistakes
    #[default]
    Recommended,
    /// Everything, including style preferences
    All,
}

/// Rule metadata
pub struct RuleMeta {
    /// Rule name (e.g., "schema/no-unknown-default")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Smallest preset that enables the rule
    pub preset: Preset,
    /// Default severity
    pub default_severity: Severity,
}

/// A check over one variant definition
pub trait Rule: Send + Sync {
    /// Get rule metadata
    fn meta(&self) -> &'static RuleMeta;

    /// Report problems in `definition`
    fn check(&self, ctx: &mut LintContext, definition: &CvaDefinition);
}

/// Registry holding all enabled lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Every built-in rule enabled by `preset`
    pub fn with_preset(preset: Preset) -> Self {
        let mut registry = Self::new();
        for rule in crate::rules::builtin() {
            if rule.meta().preset <= preset {
                registry.register(rule);
            }
        }
        registry
    }

    /// Create registry with the recommended rules enabled
    #[inline]
    pub fn with_recommended() -> Self {
        Self::with_preset(Preset::Recommended)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_recommended()
    }
}
