//! The styled-component factory.
//!
//! [`Tw`] is the entry point: `tw.div()`, `tw.button()`... for intrinsic
//! elements and `tw.styled(target)` for anything else. Each returns a
//! [`StyledBuilder`] that finishes the declaration in one of two forms:
//!
//! - template form: [`StyledBuilder::template`] / [`StyledBuilder::classes`]
//! - variant form: [`StyledBuilder::cva`]
//!
//! ```
//! use sarto_atelier_core::{props, Tw, VariantSchema};
//!
//! let tw = Tw::new();
//! let button = tw.button().cva(
//!     "btn",
//!     VariantSchema::new().variant("$size", [("sm", "text-sm"), ("lg", "text-lg")]),
//! );
//!
//! let node = button.render(props! { "$size" => "lg", "type" => "submit" }, vec![]);
//! let element = node.as_element().unwrap();
//! assert_eq!(element.tag, "button");
//! assert_eq!(element.class, "btn text-lg");
//! assert!(element.attr("$size").is_none());
//! ```

use std::fmt;
use std::sync::Arc;

use sarto_carton::{capitalize, CompactString};

use crate::host::{HostConvention, NeutralHost};
use crate::merge::{default_merger, ClassMerge};
use crate::schema::{CvaDefinition, VariantSchema};
use crate::styled::StyledComponent;
use crate::target::StyleTarget;
use crate::template::Template;
use crate::variance::{cva, Variance};

/// The collaborators every descriptor renders with.
#[derive(Clone)]
pub struct Atelier {
    merger: Arc<dyn ClassMerge>,
    host: Arc<dyn HostConvention>,
}

impl Atelier {
    pub fn new(merger: Arc<dyn ClassMerge>, host: Arc<dyn HostConvention>) -> Self {
        Self { merger, host }
    }

    #[inline]
    pub fn merger(&self) -> &dyn ClassMerge {
        self.merger.as_ref()
    }

    #[inline]
    pub fn host(&self) -> &dyn HostConvention {
        self.host.as_ref()
    }
}

impl Default for Atelier {
    fn default() -> Self {
        Self::new(default_merger(), Arc::new(NeutralHost))
    }
}

impl fmt::Debug for Atelier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Atelier")
            .field("merger", &self.merger)
            .field("host", &self.host.name())
            .finish()
    }
}

/// Styled-component factory.
#[derive(Debug, Clone, Default)]
pub struct Tw {
    atelier: Atelier,
}

impl Tw {
    /// A factory with Tailwind conflict merging and the neutral host.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_merger(mut self, merger: impl ClassMerge + 'static) -> Self {
        self.atelier.merger = Arc::new(merger);
        self
    }

    pub fn with_host(mut self, host: impl HostConvention + 'static) -> Self {
        self.atelier.host = Arc::new(host);
        self
    }

    #[inline]
    pub fn atelier(&self) -> &Atelier {
        &self.atelier
    }

    /// Start a declaration against any target.
    pub fn styled(&self, target: impl Into<StyleTarget>) -> StyledBuilder {
        StyledBuilder {
            atelier: self.atelier.clone(),
            target: target.into(),
        }
    }

    /// A standalone variance resolver using this factory's merger.
    pub fn cva(&self, base: impl Into<CompactString>, schema: VariantSchema) -> Variance {
        cva(base, schema).with_merger(self.atelier.merger.clone())
    }
}

macro_rules! element_factories {
    ($($method:ident $(=> $tag:literal)?),* $(,)?) => {
        impl Tw {
            $(element_factories!(@method $method $(=> $tag)?);)*
        }

        /// Tags with a factory method on [`Tw`].
        pub const ELEMENT_FACTORY_TAGS: &[&str] = &[
            $(element_factories!(@tag $method $(=> $tag)?)),*
        ];
    };
    (@method $method:ident) => {
        #[doc = concat!("Start a declaration against `<", stringify!($method), ">`.")]
        #[inline]
        pub fn $method(&self) -> StyledBuilder {
            self.styled(stringify!($method))
        }
    };
    (@method $method:ident => $tag:literal) => {
        #[doc = concat!("Start a declaration against `<", $tag, ">`.")]
        #[inline]
        pub fn $method(&self) -> StyledBuilder {
            self.styled($tag)
        }
    };
    (@tag $method:ident) => {
        stringify!($method)
    };
    (@tag $method:ident => $tag:literal) => {
        $tag
    };
}

// Keep in step with `sarto_carton::DOM_ELEMENTS`.
element_factories! {
    a, abbr, address, area, article, aside, audio, b, base, bdi, bdo, big,
    blockquote, body, br, button, canvas, caption, cite, code, col, colgroup,
    data, datalist, dd, del, details, dfn, dialog, div, dl, dt, em, embed,
    fieldset, figcaption, figure, footer, form, h1, h2, h3, h4, h5, h6, head,
    header, hgroup, hr, html, i, iframe, img, input, ins, kbd, keygen, label,
    legend, li, link, main, map, mark, menu, menuitem, meta, meter, nav,
    noscript, object, ol, optgroup, option, output, p, param, picture, pre,
    progress, q, rp, rt, ruby, s, samp, script, section, select, small,
    source, span, strong, style, sub, summary, sup, table, tbody, td,
    template, textarea, tfoot, th, thead, time, title, tr, track, u, ul, var,
    video, wbr,
    // SVG
    circle, clip_path => "clipPath", defs, ellipse,
    foreign_object => "foreignObject", g, image, line,
    linear_gradient => "linearGradient", mask, path, pattern, polygon,
    polyline, radial_gradient => "radialGradient", rect, stop, svg, text,
    tspan,
}

/// A declaration waiting for its classes.
#[derive(Debug, Clone)]
pub struct StyledBuilder {
    atelier: Atelier,
    target: StyleTarget,
}

impl StyledBuilder {
    /// Template form.
    pub fn template(self, template: impl Into<Template>) -> StyledComponent {
        let display_name = template_display_name(&self.target);
        StyledComponent::new(
            self.atelier,
            self.target,
            template.into(),
            None,
            display_name,
        )
    }

    /// Template form with only literal classes.
    #[inline]
    pub fn classes(self, classes: &str) -> StyledComponent {
        self.template(Template::from(classes))
    }

    /// Template form without classes of its own.
    #[inline]
    pub fn empty(self) -> StyledComponent {
        self.template(Template::new())
    }

    /// Variant form.
    pub fn cva(self, base: impl Into<CompactString>, schema: VariantSchema) -> StyledComponent {
        let variance = cva(base, schema).with_merger(self.atelier.merger.clone());
        let display_name = match self.target.as_intrinsic() {
            Some(tag) => format!("Styled{}", capitalize(tag)).into(),
            None => CompactString::const_new("StyledComponent"),
        };
        StyledComponent::new(
            self.atelier,
            self.target,
            Template::new(),
            Some(variance),
            display_name,
        )
    }

    /// Variant form from a decoded definition.
    #[inline]
    pub fn cva_definition(self, definition: CvaDefinition) -> StyledComponent {
        self.cva(definition.base, definition.schema)
    }
}

fn template_display_name(target: &StyleTarget) -> CompactString {
    match target {
        StyleTarget::Intrinsic(tag) => format!("tw.{tag}").into(),
        StyleTarget::Foreign(component) if !component.name().is_empty() => {
            component.name().into()
        }
        StyleTarget::Foreign(_) => CompactString::const_new("tw.Component"),
        StyleTarget::Styled(inner) => inner.display_name().into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::VNode;
    use crate::target::foreign;

    #[test]
    fn test_display_names() {
        let tw = Tw::new();
        assert_eq!(tw.div().empty().display_name(), "tw.div");
        assert_eq!(tw.button().cva("", VariantSchema::new()).display_name(), "StyledButton");

        let card = foreign("Card", |_, children| VNode::Fragment(children));
        assert_eq!(tw.styled(card.clone()).empty().display_name(), "Card");
        assert_eq!(
            tw.styled(card).cva("", VariantSchema::new()).display_name(),
            "StyledComponent"
        );

        let anonymous = foreign("", |_, children| VNode::Fragment(children));
        assert_eq!(tw.styled(anonymous).empty().display_name(), "tw.Component");

        let inner = tw.span().classes("x");
        assert_eq!(tw.styled(&inner).classes("y").display_name(), "tw.span");
    }

    #[test]
    fn test_element_factory_targets() {
        let tw = Tw::new();
        assert_eq!(tw.h1().empty().target(), &StyleTarget::intrinsic("h1"));
        assert_eq!(tw.textarea().empty().target(), &StyleTarget::intrinsic("textarea"));
        assert_eq!(tw.link().empty().target(), &StyleTarget::intrinsic("link"));
        assert_eq!(tw.area().empty().target(), &StyleTarget::intrinsic("area"));
        assert_eq!(tw.path().empty().target(), &StyleTarget::intrinsic("path"));
        assert_eq!(tw.circle().empty().target(), &StyleTarget::intrinsic("circle"));
        assert_eq!(tw.clip_path().empty().target(), &StyleTarget::intrinsic("clipPath"));
        assert_eq!(tw.clip_path().empty().display_name(), "tw.clipPath");
    }

    #[test]
    fn test_factories_cover_dom_elements() {
        let mut factories: Vec<&str> = ELEMENT_FACTORY_TAGS.to_vec();
        factories.sort_unstable();
        factories.dedup();
        assert_eq!(factories.len(), ELEMENT_FACTORY_TAGS.len());

        let mut known: Vec<&str> = sarto_carton::DOM_ELEMENTS.iter().copied().collect();
        known.sort_unstable();
        assert_eq!(factories, known);
    }
}
