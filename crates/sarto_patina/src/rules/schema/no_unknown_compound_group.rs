//! schema/no-unknown-compound-group
//!
//! Warn when a compound rule tests a prop that is not a variant group.
//! The rule still works against plain props, but this is usually a typo.

use sarto_atelier_core::CvaDefinition;

use super::compound_path;
use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, Severity};
use crate::rule::{Preset, Rule, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "schema/no-unknown-compound-group",
    description: "Warn on compound predicates over undeclared variant groups",
    preset: Preset::Recommended,
    default_severity: Severity::Warning,
};

/// Warn on compound predicates naming undeclared groups
pub struct NoUnknownCompoundGroup;

impl Rule for NoUnknownCompoundGroup {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &mut LintContext, definition: &CvaDefinition) {
        let schema = &definition.schema;
        for (index, rule) in schema.compound_variants.iter().enumerate() {
            for prop in rule.predicates.keys() {
                if schema.group(prop).is_some() {
                    continue;
                }
                ctx.report(
                    LintDiagnostic::warn(
                        META.name,
                        format!("Compound rule #{index} tests `{prop}`, which is not a variant group"),
                        compound_path(index, prop),
                    )
                    .with_help("The predicate is matched against the raw prop value"),
                );
            }
        }
    }
}
