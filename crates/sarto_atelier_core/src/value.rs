//! Prop values, props records and inline styles.

use std::fmt;

use sarto_carton::{format_number, CompactString, Record};

use crate::target::StyleTarget;

/// Inline style declarations, in declaration order.
///
/// Keys are kept as written (`fontSize` or `font-size`); renderers decide how
/// to print them.
pub type Style = Record<CompactString>;

/// The props record passed to a render call.
pub type Props = Record<PropValue>;

/// A handle forwarded to the rendered element (the host's notion of a ref).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeRef(CompactString);

impl NodeRef {
    #[inline]
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// A single prop value.
#[derive(Clone, PartialEq)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(f64),
    Str(CompactString),
    Style(Style),
    /// A render target, used by `$as`.
    Target(StyleTarget),
    Ref(NodeRef),
}

impl PropValue {
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The option key this value selects in a variant group.
    ///
    /// Booleans select `"true"`/`"false"`, numbers their decimal form.
    /// Values that cannot name an option return `None`.
    pub fn variant_key(&self) -> Option<CompactString> {
        match self {
            Self::Bool(true) => Some(CompactString::const_new("true")),
            Self::Bool(false) => Some(CompactString::const_new("false")),
            Self::Number(n) => Some(format_number(*n).into()),
            Self::Str(s) => Some(s.clone()),
            Self::Null | Self::Style(_) | Self::Target(_) | Self::Ref(_) => None,
        }
    }

    /// JavaScript-style truthiness, handy inside interpolations.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Str(s) => !s.is_empty(),
            Self::Style(_) | Self::Target(_) | Self::Ref(_) => true,
        }
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Style(style) => fmt::Debug::fmt(style, f),
            Self::Target(target) => fmt::Debug::fmt(target, f),
            Self::Ref(node_ref) => write!(f, "ref({})", node_ref.name()),
        }
    }
}

impl From<&str> for PropValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for PropValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value.into())
    }
}

impl From<CompactString> for PropValue {
    #[inline]
    fn from(value: CompactString) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for PropValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropValue {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<Style> for PropValue {
    #[inline]
    fn from(value: Style) -> Self {
        Self::Style(value)
    }
}

impl From<StyleTarget> for PropValue {
    #[inline]
    fn from(value: StyleTarget) -> Self {
        Self::Target(value)
    }
}

impl From<NodeRef> for PropValue {
    #[inline]
    fn from(value: NodeRef) -> Self {
        Self::Ref(value)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Convenience lookups on a props record.
pub trait PropsExt {
    /// The string value of `key`, if it is a string.
    fn get_str(&self, key: &str) -> Option<&str>;

    /// Whether `key` is present and truthy.
    fn is_truthy(&self, key: &str) -> bool;
}

impl PropsExt for Props {
    #[inline]
    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_str)
    }

    #[inline]
    fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(PropValue::is_truthy)
    }
}

/// Build a [`Props`] record.
///
/// ```
/// use sarto_atelier_core::{props, PropValue};
///
/// let props = props! { "$variant" => "primary", "disabled" => true };
/// assert_eq!(props.get("disabled"), Some(&PropValue::Bool(true)));
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::Props::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut props = $crate::Props::new();
        $( props.insert($key, $crate::PropValue::from($value)); )+
        props
    }};
}

/// Build a [`Style`] record.
#[macro_export]
macro_rules! style {
    () => {
        $crate::Style::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut style = $crate::Style::new();
        $( style.insert($key, $crate::CompactString::from($value)); )+
        style
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_key() {
        assert_eq!(PropValue::Bool(true).variant_key().as_deref(), Some("true"));
        assert_eq!(PropValue::Bool(false).variant_key().as_deref(), Some("false"));
        assert_eq!(PropValue::Number(2.0).variant_key().as_deref(), Some("2"));
        assert_eq!(PropValue::from("sm").variant_key().as_deref(), Some("sm"));
        assert_eq!(PropValue::Null.variant_key(), None);
    }

    #[test]
    fn test_truthiness() {
        assert!(!PropValue::Null.is_truthy());
        assert!(!PropValue::from("").is_truthy());
        assert!(!PropValue::Number(0.0).is_truthy());
        assert!(PropValue::from("x").is_truthy());

        let props = props! { "$active" => true, "$count" => 0 };
        assert!(props.is_truthy("$active"));
        assert!(!props.is_truthy("$count"));
        assert!(!props.is_truthy("$missing"));
    }

    #[test]
    fn test_option_conversion() {
        let none: Option<&str> = None;
        assert_eq!(PropValue::from(none), PropValue::Null);
        assert_eq!(PropValue::from(Some("a")), PropValue::from("a"));
    }
}
