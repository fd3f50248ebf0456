//! React conventions.
//!
//! Classes travel in `className`, refs are forwarded, and bound defaults
//! merge like an object spread with the caller's props last.

use sarto_atelier_core::{HostConvention, Tw};
use sarto_carton::Lazy;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReactHost;

impl HostConvention for ReactHost {
    fn name(&self) -> &str {
        "react"
    }

    fn class_prop(&self) -> &str {
        "className"
    }
}

static TW: Lazy<Tw> = Lazy::new(|| Tw::new().with_host(ReactHost));

/// The shared React factory.
#[inline]
pub fn tw() -> &'static Tw {
    &TW
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarto_atelier_core::{props, NodeRef, PropValue, StyledComponent};

    #[test]
    fn test_class_name_prop() {
        let button = tw().button().classes("btn");
        let node = button.render(
            props! { "className" => "mt-2", "ref" => NodeRef::new("btn"), "onClick" => "go" },
            vec![],
        );
        let el = node.as_element().unwrap();
        assert_eq!(el.class, "btn mt-2");
        assert_eq!(el.node_ref, Some(NodeRef::new("btn")));
        assert_eq!(el.attr("onClick"), Some(&PropValue::from("go")));
    }

    #[test]
    fn test_nested_component_receives_class_name() {
        let inner: StyledComponent = tw().span().classes("inner");
        let outer = tw().styled(&inner).classes("outer");
        let node = outer.render(props! { "class" => "legacy" }, vec![]);
        assert_eq!(node.as_element().unwrap().class, "inner outer legacy");
    }
}
