//! schema/prefer-transient-group
//!
//! Prefer `$`-prefixed variant group names. Unprefixed groups are
//! forwarded to the rendered element as attributes.

use sarto_atelier_core::{CvaDefinition, TRANSIENT_SIGIL};

use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, Severity};
use crate::rule::{Preset, Rule, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "schema/prefer-transient-group",
    description: "Prefer transient ($-prefixed) variant group names",
    preset: Preset::All,
    default_severity: Severity::Warning,
};

/// Prefer transient variant group names
pub struct PreferTransientGroup;

impl Rule for PreferTransientGroup {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &mut LintContext, definition: &CvaDefinition) {
        for group in &definition.schema.variants {
            if group.name.starts_with(TRANSIENT_SIGIL) {
                continue;
            }
            ctx.report(
                LintDiagnostic::warn(
                    META.name,
                    format!("Variant group `{}` will be forwarded to the element", group.name),
                    format!("variants.{}", group.name),
                )
                .with_help(format!("Rename it to `{TRANSIENT_SIGIL}{}`", group.name)),
            );
        }
    }
}
