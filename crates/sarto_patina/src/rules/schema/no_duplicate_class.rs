//! schema/no-duplicate-class
//!
//! Disallow a class token repeated inside one class string. The merger
//! drops the repeat anyway, so the duplicate is noise.

use rustc_hash::FxHashSet;
use sarto_atelier_core::CvaDefinition;

use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, Severity};
use crate::rule::{Preset, Rule, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "schema/no-duplicate-class",
    description: "Disallow repeated class tokens within a class string",
    preset: Preset::All,
    default_severity: Severity::Warning,
};

/// Disallow duplicate class tokens
pub struct NoDuplicateClass;

impl NoDuplicateClass {
    fn check_classes(ctx: &mut LintContext, classes: &str, path: &str) {
        let mut seen = FxHashSet::default();
        let mut reported = FxHashSet::default();
        for token in classes.split_whitespace() {
            if !seen.insert(token) && reported.insert(token) {
                ctx.report(LintDiagnostic::warn(
                    META.name,
                    format!("Class `{token}` appears more than once"),
                    path,
                ));
            }
        }
    }
}

impl Rule for NoDuplicateClass {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &mut LintContext, definition: &CvaDefinition) {
        Self::check_classes(ctx, &definition.base, "base");
        for group in &definition.schema.variants {
            for (option, classes) in group.options.iter() {
                Self::check_classes(ctx, classes, &format!("variants.{}.{option}", group.name));
            }
        }
        for (index, rule) in definition.schema.compound_variants.iter().enumerate() {
            Self::check_classes(ctx, &rule.class, &format!("compoundVariants[{index}].class"));
        }
    }
}
