//! Rules over the shape of a variant schema.

mod no_duplicate_class;
mod no_empty_compound;
mod no_unknown_compound_group;
mod no_unknown_compound_option;
mod no_unknown_default;
mod prefer_transient_group;

pub use no_duplicate_class::NoDuplicateClass;
pub use no_empty_compound::NoEmptyCompound;
pub use no_unknown_compound_group::NoUnknownCompoundGroup;
pub use no_unknown_compound_option::NoUnknownCompoundOption;
pub use no_unknown_default::NoUnknownDefault;
pub use prefer_transient_group::PreferTransientGroup;

fn compound_path(index: usize, prop: &str) -> String {
    format!("compoundVariants[{index}].{prop}")
}

#[cfg(test)]
pub(crate) fn run(rule: &dyn crate::rule::Rule, source: &str) -> Vec<crate::LintDiagnostic> {
    let definition = sarto_atelier_core::CvaDefinition::from_json(source).unwrap();
    let mut ctx = crate::LintContext::new();
    rule.check(&mut ctx, &definition);
    ctx.into_diagnostics()
}
