//! schema/no-unknown-default
//!
//! Disallow default variants that name an undeclared group or option.
//! Such a default silently selects nothing at render time.

use sarto_atelier_core::CvaDefinition;

use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, Severity};
use crate::rule::{Preset, Rule, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "schema/no-unknown-default",
    description: "Disallow defaults for undeclared variant groups or options",
    preset: Preset::Recommended,
    default_severity: Severity::Error,
};

/// Disallow unknown default variants
pub struct NoUnknownDefault;

impl Rule for NoUnknownDefault {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &mut LintContext, definition: &CvaDefinition) {
        let schema = &definition.schema;
        for (name, key) in schema.default_variants.iter() {
            let path = format!("defaultVariants.{name}");
            match schema.group(name) {
                None => ctx.report(
                    LintDiagnostic::error(
                        META.name,
                        format!("Default given for `{name}`, which is not a variant group"),
                        path,
                    )
                    .with_help("Declare the group under `variants` or remove the default"),
                ),
                Some(group) if !group.has_option(key) => {
                    let declared: Vec<&str> = group.options.keys().collect();
                    ctx.report(
                        LintDiagnostic::error(
                            META.name,
                            format!("Default `{key}` is not an option of `{name}`"),
                            path,
                        )
                        .with_help(format!("Declared options: {}", declared.join(", "))),
                    );
                }
                Some(_) => {}
            }
        }
    }
}
