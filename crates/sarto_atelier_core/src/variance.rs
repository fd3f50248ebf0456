//! Variance resolution.
//!
//! [`cva`] turns a base class string and a [`VariantSchema`] into a
//! [`Variance`], which maps a props record to a class string.
//!
//! Classes are emitted in a fixed order, and the merger keeps the last
//! conflicting token, so later sources win:
//!
//! 1. base classes
//! 2. the selected option of every group, in group declaration order
//! 3. every matching compound rule, in rule declaration order
//! 4. the caller's own `class`, then `className`
//!
//! Lookups are permissive. A selection that names an option the group does
//! not declare adds nothing, and a compound rule that references something
//! the schema does not declare simply never matches.
//! [`Variance::resolve_strict`] is the fail-closed alternative.

use std::fmt;
use std::sync::Arc;

use sarto_carton::CompactString;
use serde::Serialize;

use crate::errors::VarianceError;
use crate::merge::{default_merger, ClassMerge};
use crate::schema::{CompoundVariant, CvaDefinition, VariantGroup, VariantSchema};
use crate::template::clean_template;
use crate::value::{PropValue, Props};

/// Build a variance resolver.
///
/// ```
/// use sarto_atelier_core::{cva, props, VariantSchema};
///
/// let button = cva(
///     "btn-base",
///     VariantSchema::new().variant(
///         "$variant",
///         [("primary", "btn-primary"), ("secondary", "btn-secondary")],
///     ),
/// );
///
/// assert_eq!(button.resolve(&props! { "$variant" => "primary" }), "btn-base btn-primary");
/// assert_eq!(
///     button.resolve(&props! { "$variant" => "secondary", "class" => "extra" }),
///     "btn-base btn-secondary extra"
/// );
/// ```
pub fn cva(base: impl Into<CompactString>, schema: VariantSchema) -> Variance {
    Variance {
        base: base.into(),
        schema,
        merger: default_merger(),
    }
}

/// Where a selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionSource {
    Explicit,
    Default,
}

/// The option a group resolved to for one props record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection<'a> {
    pub group: &'a str,
    pub option: CompactString,
    pub source: SelectionSource,
    /// `None` when the group does not declare the option.
    pub class: Option<&'a str>,
}

/// A resolved `cva` function.
#[derive(Clone)]
pub struct Variance {
    base: CompactString,
    schema: VariantSchema,
    merger: Arc<dyn ClassMerge>,
}

impl Variance {
    pub fn from_definition(definition: CvaDefinition) -> Self {
        cva(definition.base, definition.schema)
    }

    /// Replace the class merger.
    pub fn with_merger(mut self, merger: Arc<dyn ClassMerge>) -> Self {
        self.merger = merger;
        self
    }

    #[inline]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[inline]
    pub fn schema(&self) -> &VariantSchema {
        &self.schema
    }

    /// The option every group selects for `props`.
    ///
    /// An explicit `null` disables the group. An empty string falls back to
    /// the default, like an absent prop. Values that cannot name an option
    /// (styles, targets, refs) select nothing.
    pub fn selections<'a>(&'a self, props: &Props) -> Vec<Selection<'a>> {
        self.schema
            .variants
            .iter()
            .filter_map(|group| self.select(group, props))
            .collect()
    }

    fn select<'a>(&'a self, group: &'a VariantGroup, props: &Props) -> Option<Selection<'a>> {
        let explicit = match props.get(&group.name) {
            Some(PropValue::Null) => return None,
            Some(value) => Some(value.variant_key()?),
            None => None,
        };
        let (option, source) = match explicit {
            Some(key) if !key.is_empty() => (key, SelectionSource::Explicit),
            _ => (
                self.schema.default_variants.get(&group.name)?.clone(),
                SelectionSource::Default,
            ),
        };
        let class = group.option(&option);
        Some(Selection {
            group: &group.name,
            option,
            source,
            class,
        })
    }

    /// Compound rules that apply to `props`, in declaration order.
    ///
    /// A predicate is checked against the caller's value for that prop, or
    /// the default variant when the caller omits it.
    pub fn matching_compounds<'a>(
        &'a self,
        props: &'a Props,
    ) -> impl Iterator<Item = &'a CompoundVariant> + 'a {
        self.schema.compound_variants.iter().filter(move |rule| {
            rule.predicates.iter().all(|(prop, predicate)| {
                let key = match props.get(prop) {
                    Some(value) => value.variant_key(),
                    None => self.schema.default_variants.get(prop).cloned(),
                };
                key.is_some_and(|key| predicate.matches(&key))
            })
        })
    }

    /// Resolve the class string for `props`.
    pub fn resolve(&self, props: &Props) -> String {
        let selections = self.selections(props);
        for selection in selections.iter().filter(|s| s.class.is_none()) {
            tracing::trace!(
                group = selection.group,
                option = %selection.option,
                "variant option not declared, contributing nothing"
            );
        }
        self.compose(&selections, props)
    }

    /// Like [`resolve`](Self::resolve), but fails on an option the schema
    /// does not declare.
    pub fn resolve_strict(&self, props: &Props) -> Result<String, VarianceError> {
        let selections = self.selections(props);
        if let Some(missing) = selections.iter().find(|s| s.class.is_none()) {
            return Err(VarianceError::UnknownOption {
                group: missing.group.into(),
                option: missing.option.clone(),
            });
        }
        Ok(self.compose(&selections, props))
    }

    fn compose(&self, selections: &[Selection<'_>], props: &Props) -> String {
        let mut fragments: Vec<&str> = Vec::with_capacity(selections.len() + 2);
        fragments.push(&self.base);
        fragments.extend(selections.iter().filter_map(|s| s.class));
        fragments.extend(self.matching_compounds(props).map(|rule| rule.class.as_str()));
        clean_template(&fragments, &caller_class(props), self.merger.as_ref())
    }
}

/// The caller's ad hoc classes: `class`, then `className`.
pub(crate) fn caller_class(props: &Props) -> String {
    let class = props.get("class").and_then(PropValue::as_str).unwrap_or("");
    let class_name = props.get("className").and_then(PropValue::as_str).unwrap_or("");
    match (class.is_empty(), class_name.is_empty()) {
        (false, false) => format!("{class} {class_name}"),
        (false, true) => class.to_string(),
        (true, _) => class_name.to_string(),
    }
}

impl fmt::Debug for Variance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variance")
            .field("base", &self.base)
            .field("schema", &self.schema)
            .field("merger", &self.merger)
            .finish()
    }
}
