//! Variant schemas.
//!
//! A [`VariantSchema`] maps variant groups to option classes, plus compound
//! rules and default selections. Group and rule order is significant (it is
//! the order classes are emitted in), so every collection here is ordered
//! and the JSON decoders walk maps in document order. That includes
//! clsx-style `{"class": bool}` objects, which rely on `serde_json`'s
//! `preserve_order` map.
//!
//! The JSON shape follows the usual `cva` configuration:
//!
//! ```json
//! {
//!   "base": "btn",
//!   "variants": { "$size": { "sm": "text-sm", "lg": ["text-lg", "px-6"] } },
//!   "compoundVariants": [{ "$size": ["sm", "lg"], "$intent": "primary", "class": "uppercase" }],
//!   "defaultVariants": { "$size": "sm" }
//! }
//! ```

use std::fmt;

use sarto_carton::{format_number, CompactString, Record, SmallVec};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::SchemaError;
use crate::value::PropValue;

/// The string key an option is selected by.
pub type VariantKey = CompactString;

/// One axis of styling choice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariantGroup {
    pub name: CompactString,
    /// Option key to class string, in declaration order.
    pub options: Record<CompactString>,
}

impl VariantGroup {
    #[inline]
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(CompactString::as_str)
    }

    #[inline]
    pub fn has_option(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }
}

/// What a compound rule expects of one prop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompoundPredicate {
    Equals(VariantKey),
    /// Matches when the prop selects any of the listed keys.
    OneOf(SmallVec<[VariantKey; 4]>),
}

impl CompoundPredicate {
    pub fn matches(&self, key: &str) -> bool {
        match self {
            Self::Equals(expected) => expected == key,
            Self::OneOf(expected) => expected.iter().any(|e| e == key),
        }
    }

    /// Every key this predicate mentions.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let keys: &[VariantKey] = match self {
            Self::Equals(key) => std::slice::from_ref(key),
            Self::OneOf(keys) => keys,
        };
        keys.iter().map(CompactString::as_str)
    }
}

/// Extra classes applied when every predicate holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundVariant {
    pub predicates: Record<CompoundPredicate>,
    pub class: CompactString,
}

impl CompoundVariant {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `prop` to select `value`.
    pub fn when(mut self, prop: impl Into<CompactString>, value: impl Into<PropValue>) -> Self {
        let key = value.into().variant_key().unwrap_or_default();
        self.predicates.insert(prop, CompoundPredicate::Equals(key));
        self
    }

    /// Require `prop` to select one of `values`.
    pub fn when_any<I, V>(mut self, prop: impl Into<CompactString>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<PropValue>,
    {
        let keys = values
            .into_iter()
            .filter_map(|value| value.into().variant_key())
            .collect();
        self.predicates.insert(prop, CompoundPredicate::OneOf(keys));
        self
    }

    pub fn class(mut self, classes: &str) -> Self {
        if !self.class.is_empty() && !classes.is_empty() {
            self.class.push(' ');
        }
        self.class.push_str(classes);
        self
    }
}

/// Variant groups, compound rules and default selections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariantSchema {
    pub variants: Vec<VariantGroup>,
    pub compound_variants: Vec<CompoundVariant>,
    pub default_variants: Record<VariantKey>,
}

impl VariantSchema {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variant group. Redeclaring a group replaces its options.
    pub fn variant<I, K, C>(mut self, name: impl Into<CompactString>, options: I) -> Self
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<CompactString>,
        C: Into<CompactString>,
    {
        let group = VariantGroup {
            name: name.into(),
            options: options.into_iter().map(|(k, c)| (k, c.into())).collect(),
        };
        match self.variants.iter_mut().find(|g| g.name == group.name) {
            Some(existing) => *existing = group,
            None => self.variants.push(group),
        }
        self
    }

    pub fn compound(mut self, rule: CompoundVariant) -> Self {
        self.compound_variants.push(rule);
        self
    }

    /// Select `value` for `group` when the caller does not.
    pub fn default_variant(
        mut self,
        group: impl Into<CompactString>,
        value: impl Into<PropValue>,
    ) -> Self {
        if let Some(key) = value.into().variant_key() {
            self.default_variants.insert(group, key);
        }
        self
    }

    pub fn group(&self, name: &str) -> Option<&VariantGroup> {
        self.variants.iter().find(|g| g.name == name)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty() && self.compound_variants.is_empty()
    }
}

/// A base class string together with its variant schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CvaDefinition {
    pub base: CompactString,
    pub schema: VariantSchema,
}

impl CvaDefinition {
    pub fn new(base: impl Into<CompactString>, schema: VariantSchema) -> Self {
        Self {
            base: base.into(),
            schema,
        }
    }

    /// Decode a definition from JSON text.
    pub fn from_json(source: &str) -> Result<Self, SchemaError> {
        if !source.trim_start().starts_with('{') {
            return Err(SchemaError::NotAnObject);
        }
        Ok(serde_json::from_str(source)?)
    }
}

// =============================================================================
// JSON decoding
// =============================================================================

/// The option key a JSON scalar selects.
pub(crate) fn key_from_json(value: &Value) -> Option<VariantKey> {
    match value {
        Value::Bool(true) => Some(CompactString::const_new("true")),
        Value::Bool(false) => Some(CompactString::const_new("false")),
        Value::Number(n) => n.as_f64().map(|n| format_number(n).into()),
        Value::String(s) => Some(s.as_str().into()),
        _ => None,
    }
}

/// Flatten a clsx-style class value: strings, arrays, `{class: bool}`
/// objects. Falsy entries contribute nothing.
fn class_from_json(value: &Value, out: &mut CompactString) -> Result<(), &'static str> {
    match value {
        Value::Null | Value::Bool(false) => {}
        Value::String(s) => push_classes(out, s),
        Value::Array(items) => {
            for item in items {
                class_from_json(item, out)?;
            }
        }
        Value::Object(map) => {
            for (class, enabled) in map {
                if enabled.as_bool().unwrap_or(!enabled.is_null()) {
                    push_classes(out, class);
                }
            }
        }
        Value::Bool(true) | Value::Number(_) => return Err("expected a class string"),
    }
    Ok(())
}

fn push_classes(out: &mut CompactString, classes: &str) {
    if classes.trim().is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(classes.trim());
}

#[derive(Default)]
struct Groups(Vec<VariantGroup>);

impl<'de> Deserialize<'de> for Groups {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = Groups;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of variant groups")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Groups, A::Error> {
                let mut groups = Vec::new();
                while let Some((name, Options(options))) =
                    map.next_entry::<CompactString, Options>()?
                {
                    groups.push(VariantGroup { name, options });
                }
                Ok(Groups(groups))
            }
        }

        deserializer.deserialize_map(GroupsVisitor)
    }
}

struct Options(Record<CompactString>);

impl<'de> Deserialize<'de> for Options {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OptionsVisitor;

        impl<'de> Visitor<'de> for OptionsVisitor {
            type Value = Options;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of option classes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Options, A::Error> {
                let mut options = Record::new();
                while let Some(key) = map.next_key::<CompactString>()? {
                    let value: Value = map.next_value()?;
                    let mut class = CompactString::default();
                    class_from_json(&value, &mut class).map_err(|message| {
                        de::Error::custom(format_args!("option `{key}`: {message}"))
                    })?;
                    options.insert(key, class);
                }
                Ok(Options(options))
            }
        }

        deserializer.deserialize_map(OptionsVisitor)
    }
}

struct Compound(CompoundVariant);

impl<'de> Deserialize<'de> for Compound {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CompoundVisitor;

        impl<'de> Visitor<'de> for CompoundVisitor {
            type Value = Compound;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a compound variant rule")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Compound, A::Error> {
                let mut rule = CompoundVariant::new();
                while let Some(key) = map.next_key::<CompactString>()? {
                    let value: Value = map.next_value()?;
                    if key == "class" || key == "className" {
                        class_from_json(&value, &mut rule.class).map_err(de::Error::custom)?;
                        continue;
                    }
                    let predicate = match &value {
                        Value::Array(items) => CompoundPredicate::OneOf(
                            items.iter().filter_map(key_from_json).collect(),
                        ),
                        other => key_from_json(other)
                            .map(CompoundPredicate::Equals)
                            .ok_or_else(|| {
                                de::Error::custom(format_args!(
                                    "compound predicate `{key}` must be a string, number, boolean or array"
                                ))
                            })?,
                    };
                    rule.predicates.insert(key, predicate);
                }
                Ok(Compound(rule))
            }
        }

        deserializer.deserialize_map(CompoundVisitor)
    }
}

#[derive(Default)]
struct Defaults(Record<VariantKey>);

impl<'de> Deserialize<'de> for Defaults {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DefaultsVisitor;

        impl<'de> Visitor<'de> for DefaultsVisitor {
            type Value = Defaults;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of default variants")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Defaults, A::Error> {
                let mut defaults = Record::new();
                while let Some(group) = map.next_key::<CompactString>()? {
                    let value: Value = map.next_value()?;
                    if let Some(key) = key_from_json(&value) {
                        defaults.insert(group, key);
                    }
                }
                Ok(Defaults(defaults))
            }
        }

        deserializer.deserialize_map(DefaultsVisitor)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchema {
    #[serde(default)]
    base: Option<Value>,
    #[serde(default)]
    variants: Groups,
    #[serde(default)]
    compound_variants: Vec<Compound>,
    #[serde(default)]
    default_variants: Defaults,
}

impl RawSchema {
    fn into_schema(self) -> VariantSchema {
        VariantSchema {
            variants: self.variants.0,
            compound_variants: self.compound_variants.into_iter().map(|c| c.0).collect(),
            default_variants: self.default_variants.0,
        }
    }
}

impl<'de> Deserialize<'de> for VariantSchema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawSchema::deserialize(deserializer).map(RawSchema::into_schema)
    }
}

impl<'de> Deserialize<'de> for CvaDefinition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut raw = RawSchema::deserialize(deserializer)?;
        let mut base = CompactString::default();
        if let Some(value) = raw.base.take() {
            class_from_json(&value, &mut base)
                .map_err(|message| de::Error::custom(format_args!("base: {message}")))?;
        }
        Ok(Self {
            base,
            schema: raw.into_schema(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let schema = VariantSchema::new()
            .variant("$size", [("sm", "text-sm"), ("lg", "text-lg")])
            .variant("$disabled", [("true", "opacity-50")])
            .compound(CompoundVariant::new().when("$size", "lg").when("$disabled", true).class("p-0"))
            .default_variant("$size", "sm");

        assert_eq!(schema.variants.len(), 2);
        assert_eq!(schema.group("$size").and_then(|g| g.option("lg")), Some("text-lg"));
        assert_eq!(
            schema.compound_variants[0].predicates.get("$disabled"),
            Some(&CompoundPredicate::Equals("true".into()))
        );
        assert_eq!(schema.default_variants.get("$size").map(|k| k.as_str()), Some("sm"));
    }

    #[test]
    fn test_redeclared_group_replaces() {
        let schema = VariantSchema::new()
            .variant("$a", [("x", "1")])
            .variant("$b", [("x", "2")])
            .variant("$a", [("y", "3")]);
        let names: Vec<_> = schema.variants.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["$a", "$b"]);
        assert!(!schema.group("$a").is_some_and(|g| g.has_option("x")));
    }

    #[test]
    fn test_predicate_matches() {
        let rule = CompoundVariant::new().when_any("$size", ["sm", "md"]);
        let predicate = rule.predicates.get("$size").unwrap();
        assert!(predicate.matches("sm"));
        assert!(predicate.matches("md"));
        assert!(!predicate.matches("lg"));
        assert_eq!(predicate.keys().collect::<Vec<_>>(), ["sm", "md"]);
    }

    #[test]
    fn test_decode_preserves_order() {
        let definition = CvaDefinition::from_json(
            r#"{
                "base": ["btn", "inline-flex"],
                "variants": {
                    "$z": { "b": "z-b", "a": "z-a" },
                    "$a": { "true": "a-on", "false": null, "2": ["two", "  "] }
                },
                "compoundVariants": [
                    { "$z": ["a", "b"], "$a": true, "class": "c1", "className": "c2" }
                ],
                "defaultVariants": { "$z": "a", "$a": false }
            }"#,
        )
        .unwrap();

        assert_eq!(definition.base, "btn inline-flex");
        let names: Vec<_> = definition.schema.variants.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["$z", "$a"]);

        let z = definition.schema.group("$z").unwrap();
        assert_eq!(z.options.keys().collect::<Vec<_>>(), ["b", "a"]);

        let a = definition.schema.group("$a").unwrap();
        assert_eq!(a.option("false"), Some(""));
        assert_eq!(a.option("2"), Some("two"));

        let rule = &definition.schema.compound_variants[0];
        assert_eq!(rule.class, "c1 c2");
        assert_eq!(rule.predicates.get("$a"), Some(&CompoundPredicate::Equals("true".into())));
        assert!(matches!(rule.predicates.get("$z"), Some(CompoundPredicate::OneOf(keys)) if keys.len() == 2));

        assert_eq!(
            definition.schema.default_variants.get("$a").map(|k| k.as_str()),
            Some("false")
        );
    }

    #[test]
    fn test_decode_clsx_objects() {
        let definition = CvaDefinition::from_json(
            r#"{ "variants": { "$tone": { "muted": { "text-gray-500": true, "italic": false } } } }"#,
        )
        .unwrap();
        assert_eq!(definition.base, "");
        assert_eq!(
            definition.schema.group("$tone").and_then(|g| g.option("muted")),
            Some("text-gray-500")
        );
    }

    #[test]
    fn test_decode_clsx_object_keeps_document_order() {
        let definition = CvaDefinition::from_json(
            r#"{
                "base": { "z-10": true, "relative": true, "a-1": 1 },
                "variants": { "$tone": { "x": { "z-10": true, "hidden": null, "a-1": true } } },
                "compoundVariants": [{ "$tone": "x", "class": { "mt-2": true, "mb-1": true } }]
            }"#,
        )
        .unwrap();
        assert_eq!(definition.base, "z-10 relative a-1");
        assert_eq!(
            definition.schema.group("$tone").and_then(|g| g.option("x")),
            Some("z-10 a-1")
        );
        assert_eq!(definition.schema.compound_variants[0].class, "mt-2 mb-1");
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(CvaDefinition::from_json("[]"), Err(SchemaError::NotAnObject)));
        assert!(matches!(CvaDefinition::from_json("{"), Err(SchemaError::Json(_))));
        assert!(CvaDefinition::from_json(r#"{ "variants": { "$a": { "x": 1 } } }"#).is_err());
        assert!(
            CvaDefinition::from_json(r#"{ "compoundVariants": [{ "$a": { "nested": true } }] }"#)
                .is_err()
        );
    }
}
