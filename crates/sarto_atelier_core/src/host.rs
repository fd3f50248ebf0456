//! Host conventions.
//!
//! Every UI host names and merges a few props differently: which prop carries
//! the class string, whether refs exist, how default props combine with the
//! caller's. A [`HostConvention`] captures exactly those differences and
//! renders intrinsic elements; everything else in the engine is shared.

use std::fmt;

use sarto_carton::CompactString;

use crate::node::{ElementNode, VNode};
use crate::target::StyleTarget;
use crate::transient::AS_PROP;
use crate::value::{NodeRef, PropValue, Props, Style};

/// The props a styled component consumes itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalProps {
    /// The `$as` override, if any.
    pub as_target: Option<StyleTarget>,
    /// The caller's class string.
    pub class: String,
    pub style: Style,
    pub node_ref: Option<NodeRef>,
}

/// What gets handed to [`HostConvention::element`].
#[derive(Debug, Clone, Default)]
pub struct ElementParts {
    pub class: String,
    pub style: Style,
    pub node_ref: Option<NodeRef>,
    pub attrs: Props,
    pub children: Vec<VNode>,
}

/// Prop-handling rules of a UI host.
pub trait HostConvention: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// The prop name the host reads classes from.
    fn class_prop(&self) -> &str {
        "class"
    }

    /// Whether refs are forwarded to the rendered element.
    fn forwards_ref(&self) -> bool {
        true
    }

    /// Take the locally consumed props out of `props`.
    ///
    /// Both `class` and `className` are consumed; the canonical class prop
    /// comes first in the joined string.
    fn split(&self, props: &mut Props) -> LocalProps {
        let as_target = match props.remove(AS_PROP) {
            Some(PropValue::Target(target)) => Some(target),
            Some(PropValue::Str(tag)) if !tag.is_empty() => Some(StyleTarget::Intrinsic(tag)),
            _ => None,
        };

        let canonical = self.class_prop();
        let alias = if canonical == "class" { "className" } else { "class" };
        let mut class = String::new();
        for name in [canonical, alias] {
            if let Some(PropValue::Str(value)) = props.remove(name) {
                if !value.trim().is_empty() {
                    if !class.is_empty() {
                        class.push(' ');
                    }
                    class.push_str(value.trim());
                }
            }
        }

        let style = match props.remove("style") {
            Some(PropValue::Style(style)) => style,
            _ => Style::new(),
        };

        let node_ref = if self.forwards_ref() {
            match props.remove("ref") {
                Some(PropValue::Ref(node_ref)) => Some(node_ref),
                _ => None,
            }
        } else {
            None
        };

        LocalProps {
            as_target,
            class,
            style,
            node_ref,
        }
    }

    /// Combine bound defaults with the caller's props. The caller wins.
    fn merge_defaults(&self, defaults: &Props, props: &Props) -> Props {
        let mut merged = defaults.clone();
        merged.overlay(props.clone());
        merged
    }

    /// Render an intrinsic element.
    fn element(&self, tag: &str, parts: ElementParts) -> VNode {
        VNode::Element(ElementNode {
            tag: CompactString::from(tag),
            class: CompactString::from(parts.class),
            attrs: parts.attrs,
            style: parts.style,
            node_ref: parts.node_ref,
            children: parts.children,
        })
    }
}

/// The host-agnostic convention: `class`, refs forwarded, caller-wins
/// defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralHost;

impl HostConvention for NeutralHost {
    fn name(&self) -> &str {
        "neutral"
    }
}
