//! Props records from JSON.
//!
//! Used by the CLI and by tests that keep their fixtures as JSON. Key order
//! is preserved, so attributes render in the order they were written.

use std::fmt;

use sarto_carton::{format_number, CompactString};
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::errors::SchemaError;
use crate::target::StyleTarget;
use crate::transient::AS_PROP;
use crate::value::{PropValue, Props, Style};

/// Decode a JSON object into a [`Props`] record.
///
/// Scalars map to their [`PropValue`] counterparts, `null` to
/// [`PropValue::Null`]. `$as` strings name an intrinsic target and the
/// `style` object becomes a [`Style`]. Arrays and other objects are rejected.
///
/// ```
/// use sarto_atelier_core::{props_from_json, PropValue, StyleTarget};
///
/// let props = props_from_json(r#"{ "$as": "a", "href": "/", "tabIndex": 0 }"#).unwrap();
/// assert_eq!(props.get("$as"), Some(&PropValue::Target(StyleTarget::intrinsic("a"))));
/// assert_eq!(props.keys().collect::<Vec<_>>(), ["$as", "href", "tabIndex"]);
/// ```
pub fn props_from_json(source: &str) -> Result<Props, SchemaError> {
    if !source.trim_start().starts_with('{') {
        return Err(SchemaError::NotAnObject);
    }
    let JsonProps(props) = serde_json::from_str(source)?;
    Ok(props)
}

struct JsonProps(Props);

impl<'de> Deserialize<'de> for JsonProps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PropsVisitor;

        impl<'de> Visitor<'de> for PropsVisitor {
            type Value = JsonProps;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a props object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<JsonProps, A::Error> {
                let mut props = Props::new();
                while let Some(key) = map.next_key::<CompactString>()? {
                    let value = map.next_value_seed(ValueSeed { key: &key })?;
                    props.insert(key, value);
                }
                Ok(JsonProps(props))
            }
        }

        deserializer.deserialize_map(PropsVisitor)
    }
}

struct ValueSeed<'k> {
    key: &'k str,
}

impl<'de> DeserializeSeed<'de> for ValueSeed<'_> {
    type Value = PropValue;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<PropValue, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for ValueSeed<'_> {
    type Value = PropValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a scalar value for `{}`", self.key)
    }

    fn visit_unit<E: de::Error>(self) -> Result<PropValue, E> {
        Ok(PropValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<PropValue, E> {
        Ok(PropValue::Null)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<PropValue, E> {
        Ok(PropValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<PropValue, E> {
        Ok(PropValue::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<PropValue, E> {
        Ok(PropValue::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<PropValue, E> {
        Ok(PropValue::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<PropValue, E> {
        if self.key == AS_PROP {
            Ok(PropValue::Target(StyleTarget::intrinsic(v)))
        } else {
            Ok(PropValue::from(v))
        }
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PropValue, A::Error> {
        if self.key != "style" {
            return Err(de::Error::custom(format_args!(
                "unsupported value for `{}`: only `style` may be an object",
                self.key
            )));
        }
        let mut style = Style::new();
        while let Some(property) = map.next_key::<CompactString>()? {
            let value: serde_json::Value = map.next_value()?;
            let value = match value {
                serde_json::Value::String(s) => CompactString::from(s),
                serde_json::Value::Number(n) => match n.as_f64() {
                    Some(n) => format_number(n).into(),
                    None => continue,
                },
                serde_json::Value::Null => continue,
                _ => {
                    return Err(de::Error::custom(format_args!(
                        "style property `{property}` must be a string or number"
                    )))
                }
            };
            style.insert(property, value);
        }
        Ok(PropValue::Style(style))
    }
}
