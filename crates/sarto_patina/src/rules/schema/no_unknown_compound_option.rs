//! schema/no-unknown-compound-option
//!
//! Warn when a compound rule expects an option its group never declares.
//! Such a rule is inert: the group cannot select that option.

use sarto_atelier_core::CvaDefinition;

use super::compound_path;
use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, Severity};
use crate::rule::{Preset, Rule, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "schema/no-unknown-compound-option",
    description: "Warn on compound predicates that expect undeclared options",
    preset: Preset::Recommended,
    default_severity: Severity::Warning,
};

/// Warn on compound predicates expecting undeclared options
pub struct NoUnknownCompoundOption;

impl Rule for NoUnknownCompoundOption {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &mut LintContext, definition: &CvaDefinition) {
        let schema = &definition.schema;
        for (index, rule) in schema.compound_variants.iter().enumerate() {
            for (prop, predicate) in rule.predicates.iter() {
                // undeclared groups belong to no-unknown-compound-group
                let Some(group) = schema.group(prop) else {
                    continue;
                };
                for key in predicate.keys().filter(|key| !group.has_option(key)) {
                    ctx.report(LintDiagnostic::warn(
                        META.name,
                        format!("Compound rule #{index} expects `{prop}` = `{key}`, which `{prop}` does not declare"),
                        compound_path(index, prop),
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::run;
    use super::*;

    #[test]
    fn test_declared_option() {
        let diagnostics = run(
            &NoUnknownCompoundOption,
            r#"{"variants":{"$size":{"sm":"a"}},"compoundVariants":[{"$size":"sm","class":"x"}]}"#,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_each_unknown_key_reported() {
        let diagnostics = run(
            &NoUnknownCompoundOption,
            r#"{"variants":{"$size":{"sm":"a"}},"compoundVariants":[{"$size":["sm","md","lg"],"class":"x"}]}"#,
        );
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        insta::assert_debug_snapshot!(messages, @r###"
        [
            "Compound rule #0 expects `$size` = `md`, which `$size` does not declare",
            "Compound rule #0 expects `$size` = `lg`, which `$size` does not declare",
        ]
        "###);
    }

    #[test]
    fn test_undeclared_group_skipped() {
        let diagnostics = run(
            &NoUnknownCompoundOption,
            r#"{"compoundVariants":[{"disabled":true,"class":"x"}]}"#,
        );
        assert!(diagnostics.is_empty());
    }
}
