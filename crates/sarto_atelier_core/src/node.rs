//! Host-neutral node tree produced by a render call.

use sarto_carton::CompactString;

use crate::value::{NodeRef, PropValue, Props, Style};

/// A rendered node.
#[derive(Debug, Clone, PartialEq)]
pub enum VNode {
    Element(ElementNode),
    Text(CompactString),
    Fragment(Vec<VNode>),
}

impl VNode {
    #[inline]
    pub fn text(text: impl Into<CompactString>) -> Self {
        Self::Text(text.into())
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<&str> for VNode {
    #[inline]
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<ElementNode> for VNode {
    #[inline]
    fn from(element: ElementNode) -> Self {
        Self::Element(element)
    }
}

/// An intrinsic element with its final class string and inline style.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    pub tag: CompactString,
    /// Final, merged class string.
    pub class: CompactString,
    /// Forwarded attributes, in prop order.
    pub attrs: Props,
    pub style: Style,
    pub node_ref: Option<NodeRef>,
    pub children: Vec<VNode>,
}

impl ElementNode {
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self {
            tag: tag.into(),
            class: CompactString::default(),
            attrs: Props::new(),
            style: Style::new(),
            node_ref: None,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn attr(&self, name: &str) -> Option<&PropValue> {
        self.attrs.get(name)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class.split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }
}
