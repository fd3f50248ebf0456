//! schema/no-empty-compound
//!
//! Warn on compound rules that can never matter: no predicates (always
//! applies), an empty `oneOf` list (never applies) or no classes.

use sarto_atelier_core::{CompoundPredicate, CvaDefinition};

use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, Severity};
use crate::rule::{Preset, Rule, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "schema/no-empty-compound",
    description: "Warn on compound rules without predicates or classes",
    preset: Preset::Recommended,
    default_severity: Severity::Warning,
};

/// Warn on degenerate compound rules
pub struct NoEmptyCompound;

impl Rule for NoEmptyCompound {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &mut LintContext, definition: &CvaDefinition) {
        for (index, rule) in definition.schema.compound_variants.iter().enumerate() {
            let path = format!("compoundVariants[{index}]");
            if rule.predicates.is_empty() {
                ctx.report(
                    LintDiagnostic::warn(
                        META.name,
                        format!("Compound rule #{index} has no predicates and always applies"),
                        path.as_str(),
                    )
                    .with_help("Move the classes into `base`"),
                );
            }
            for (prop, predicate) in rule.predicates.iter() {
                if matches!(predicate, CompoundPredicate::OneOf(keys) if keys.is_empty()) {
                    ctx.report(LintDiagnostic::warn(
                        META.name,
                        format!("Compound rule #{index} expects `{prop}` to be one of nothing and never applies"),
                        format!("{path}.{prop}"),
                    ));
                }
            }
            if rule.class.trim().is_empty() {
                ctx.report(LintDiagnostic::warn(
                    META.name,
                    format!("Compound rule #{index} contributes no classes"),
                    format!("{path}.class"),
                ));
            }
        }
    }
}
