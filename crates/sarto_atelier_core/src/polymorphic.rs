//! Polymorphic target resolution.
//!
//! Decides what a render call actually renders, given the declared target
//! and an optional `$as` override.
//!
//! Wrapping a styled component never replaces it: the override is threaded
//! to the inner component as its own `$as`, so the inner component keeps its
//! classes and performs its own resolution.

use crate::target::StyleTarget;
use crate::transient::strip_transient;
use crate::value::Props;

/// Outcome of [`resolve_target`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// What this render call renders.
    pub target: StyleTarget,
    /// Override to hand to the inner styled component, if any.
    pub nested_as: Option<StyleTarget>,
}

/// Pick the effective target.
pub fn resolve_target(declared: &StyleTarget, override_target: Option<StyleTarget>) -> Resolution {
    if declared.is_styled() {
        if let Some(nested) = &override_target {
            tracing::debug!(
                declared = declared.display_name(),
                nested = nested.display_name(),
                "threading `$as` to the inner styled component"
            );
        }
        return Resolution {
            target: declared.clone(),
            nested_as: override_target,
        };
    }
    Resolution {
        target: override_target.unwrap_or_else(|| declared.clone()),
        nested_as: None,
    }
}

/// Whether every prop, transient ones included, reaches the target.
///
/// True when rendering another styled component or when the declared target
/// is a foreign component, which may use `$` props of its own.
#[inline]
pub fn forwards_all_props(resolved: &StyleTarget, declared: &StyleTarget) -> bool {
    resolved.is_styled() || !declared.is_intrinsic()
}

/// Apply the forwarding rule to `props`.
pub fn forward_props(mut props: Props, resolved: &StyleTarget, declared: &StyleTarget) -> Props {
    if !forwards_all_props(resolved, declared) {
        strip_transient(&mut props);
    }
    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::Tw;
    use crate::node::VNode;
    use crate::props;
    use crate::target::foreign;

    #[test]
    fn test_intrinsic_override() {
        let declared = StyleTarget::intrinsic("div");
        let resolution = resolve_target(&declared, Some(StyleTarget::intrinsic("button")));
        assert_eq!(resolution.target, StyleTarget::intrinsic("button"));
        assert_eq!(resolution.nested_as, None);

        let resolution = resolve_target(&declared, None);
        assert_eq!(resolution.target, declared);
    }

    #[test]
    fn test_styled_nests_override() {
        let inner = StyleTarget::from(Tw::new().div().classes("inner"));
        let resolution = resolve_target(&inner, Some(StyleTarget::intrinsic("button")));
        assert_eq!(resolution.target, inner);
        assert_eq!(resolution.nested_as, Some(StyleTarget::intrinsic("button")));

        let resolution = resolve_target(&inner, None);
        assert_eq!(resolution.nested_as, None);
    }

    #[test]
    fn test_forwarding_rule() {
        let div = StyleTarget::intrinsic("div");
        let card = foreign("Card", |_, children| VNode::Fragment(children));
        let styled = StyleTarget::from(Tw::new().span().empty());

        let props = props! { "$tone" => "red", "id" => "x" };
        assert_eq!(forward_props(props.clone(), &div, &div).len(), 1);
        assert_eq!(forward_props(props.clone(), &card, &card).len(), 2);
        assert_eq!(forward_props(props.clone(), &styled, &styled).len(), 2);
        // an override of a foreign target still forwards everything
        assert_eq!(forward_props(props, &div, &card).len(), 2);
    }
}
