//! Solid conventions.
//!
//! Classes travel in `class`, refs are forwarded, and bound defaults merge
//! like `mergeProps(defaults, props)`.

use sarto_atelier_core::{HostConvention, Tw};
use sarto_carton::Lazy;

#[derive(Debug, Clone, Copy, Default)]
pub struct SolidHost;

impl HostConvention for SolidHost {
    fn name(&self) -> &str {
        "solid"
    }
}

static TW: Lazy<Tw> = Lazy::new(|| Tw::new().with_host(SolidHost));

/// The shared Solid factory.
#[inline]
pub fn tw() -> &'static Tw {
    &TW
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarto_atelier_core::{props, PropValue};

    #[test]
    fn test_class_prop() {
        let label = tw().label().classes("text-sm");
        let node = label.render(props! { "class" => "font-bold", "for" => "name" }, vec![]);
        let el = node.as_element().unwrap();
        assert_eq!(el.class, "text-sm font-bold");
        assert_eq!(el.attr("for"), Some(&PropValue::from("name")));
    }
}
