//! Styled-component descriptors.
//!
//! A [`StyledComponent`] is immutable. Chaining (`with_style`, `with_props`)
//! produces a new descriptor sharing the template, variance and target of
//! the original through `Arc`s.

use std::fmt;
use std::sync::Arc;

use sarto_carton::CompactString;

use crate::factory::Atelier;
use crate::host::{ElementParts, HostConvention};
use crate::node::VNode;
use crate::polymorphic::{forward_props, resolve_target, Resolution};
use crate::target::StyleTarget;
use crate::template::{clean_template, merge_arrays, Template};
use crate::transient::AS_PROP;
use crate::value::{NodeRef, PropValue, Props, Style};
use crate::variance::Variance;

type StyleFn = Arc<dyn Fn(&Props) -> Style + Send + Sync>;

/// An inline-style rule added by [`StyledComponent::with_style`].
#[derive(Clone)]
pub enum StyleRule {
    Static(Style),
    /// Evaluated against the incoming props on every render.
    Computed(StyleFn),
}

impl StyleRule {
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Props) -> Style + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    pub fn evaluate(&self, props: &Props) -> Style {
        match self {
            Self::Static(style) => style.clone(),
            Self::Computed(f) => f(props),
        }
    }
}

impl From<Style> for StyleRule {
    #[inline]
    fn from(style: Style) -> Self {
        Self::Static(style)
    }
}

impl fmt::Debug for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(style) => f.debug_tuple("Static").field(style).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A reusable styled unit.
#[derive(Clone)]
pub struct StyledComponent {
    atelier: Atelier,
    target: StyleTarget,
    template: Arc<Template>,
    variance: Option<Arc<Variance>>,
    styles: Vec<StyleRule>,
    defaults: Props,
    display_name: CompactString,
}

impl StyledComponent {
    pub(crate) fn new(
        atelier: Atelier,
        target: StyleTarget,
        template: Template,
        variance: Option<Variance>,
        display_name: CompactString,
    ) -> Self {
        tracing::debug!(
            component = %display_name,
            target = target.display_name(),
            variants = variance.is_some(),
            "styled component declared"
        );
        Self {
            atelier,
            target,
            template: Arc::new(template),
            variance: variance.map(Arc::new),
            styles: Vec::new(),
            defaults: Props::new(),
            display_name,
        }
    }

    #[inline]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The target this component was declared against.
    #[inline]
    pub fn target(&self) -> &StyleTarget {
        &self.target
    }

    #[inline]
    pub fn variance(&self) -> Option<&Variance> {
        self.variance.as_deref()
    }

    #[inline]
    pub fn defaults(&self) -> &Props {
        &self.defaults
    }

    /// Rename the component.
    pub fn named(mut self, name: impl Into<CompactString>) -> Self {
        self.display_name = name.into();
        self
    }

    /// A new descriptor with `rule` appended to the inline-style rules.
    pub fn with_style(&self, rule: impl Into<StyleRule>) -> Self {
        let mut next = self.clone();
        next.styles.push(rule.into());
        next
    }

    /// Bind default props. The caller's props still win key by key.
    ///
    /// The returned unit cannot bind defaults again.
    pub fn with_props(&self, defaults: Props) -> WithProps {
        let mut bound = self.clone();
        bound.defaults.overlay(defaults);
        bound.display_name = format!("{}.withProps", self.display_name).into();
        WithProps {
            inner: Arc::new(bound),
        }
    }

    /// Render with the given props and children.
    pub fn render(&self, props: Props, children: Vec<VNode>) -> VNode {
        let _span = tracing::trace_span!("render", component = %self.display_name).entered();

        let host = self.atelier.host();
        let mut props = if self.defaults.is_empty() {
            props
        } else {
            host.merge_defaults(&self.defaults, &props)
        };

        if let Some(variance) = &self.variance {
            let class = variance.resolve(&props);
            props.remove("class");
            props.remove("className");
            if !class.is_empty() {
                props.insert(host.class_prop(), PropValue::from(class));
            }
        }

        self.render_template(host, props, children)
    }

    fn render_template(
        &self,
        host: &dyn HostConvention,
        mut props: Props,
        children: Vec<VNode>,
    ) -> VNode {
        // interpolations and style rules see the full incoming props
        let elements = self.template.evaluate(&props);
        let mut style = Style::new();
        for rule in &self.styles {
            style.overlay(rule.evaluate(&props));
        }

        let local = host.split(&mut props);
        let Resolution { target, nested_as } = resolve_target(&self.target, local.as_target);

        let fragments = merge_arrays(self.template.segments(), &elements);
        let class = clean_template(&fragments, &local.class, self.atelier.merger());
        style.overlay(local.style);

        let attrs = forward_props(props, &target, &self.target);
        let call = RenderCall {
            class,
            style,
            node_ref: local.node_ref,
            nested_as,
            attrs,
        };

        match target {
            StyleTarget::Intrinsic(tag) => host.element(
                &tag,
                ElementParts {
                    class: call.class,
                    style: call.style,
                    node_ref: call.node_ref,
                    attrs: call.attrs,
                    children,
                },
            ),
            StyleTarget::Foreign(component) => component.render(call.into_props(host), children),
            StyleTarget::Styled(inner) => inner.render(call.into_props(host), children),
        }
    }
}

/// Everything a render call hands to its target.
struct RenderCall {
    class: String,
    style: Style,
    node_ref: Option<NodeRef>,
    nested_as: Option<StyleTarget>,
    attrs: Props,
}

impl RenderCall {
    /// Fold the call back into a props record for a component target.
    fn into_props(self, host: &dyn HostConvention) -> Props {
        let mut props = self.attrs;
        if !self.class.is_empty() {
            props.insert(host.class_prop(), PropValue::from(self.class));
        }
        if !self.style.is_empty() {
            props.insert("style", PropValue::Style(self.style));
        }
        if let Some(node_ref) = self.node_ref {
            props.insert("ref", PropValue::Ref(node_ref));
        }
        if let Some(nested) = self.nested_as {
            props.insert(AS_PROP, PropValue::Target(nested));
        }
        props
    }
}

impl fmt::Debug for StyledComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyledComponent")
            .field("display_name", &self.display_name)
            .field("target", &self.target)
            .field("template", &self.template)
            .field("variance", &self.variance.is_some())
            .field("styles", &self.styles)
            .field("defaults", &self.defaults)
            .finish()
    }
}

/// A styled component with bound default props.
///
/// Defaults bind once. The bound unit can be rendered or styled again,
/// but it hands out no descriptor to bind a second set of defaults on:
///
/// ```compile_fail
/// use sarto_atelier_core::{props, Tw};
///
/// let submit = Tw::new().button().classes("btn").with_props(props! { "type" => "submit" });
/// let _ = submit.into_inner().with_props(props! { "type" => "reset" });
/// ```
#[derive(Debug, Clone)]
pub struct WithProps {
    inner: Arc<StyledComponent>,
}

impl WithProps {
    #[inline]
    pub fn render(&self, props: Props, children: Vec<VNode>) -> VNode {
        self.inner.render(props, children)
    }

    #[inline]
    pub fn display_name(&self) -> &str {
        self.inner.display_name()
    }

    #[inline]
    pub fn defaults(&self) -> &Props {
        self.inner.defaults()
    }

    #[inline]
    pub(crate) fn into_inner(self) -> Arc<StyledComponent> {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::Tw;
    use crate::{props, style};

    #[test]
    fn test_with_style_does_not_mutate() {
        let tw = Tw::new();
        let base = tw.div().classes("p-2");
        let styled = base.with_style(style! { "color" => "red" });

        let plain = base.render(props! {}, vec![]);
        let colored = styled.render(props! {}, vec![]);
        assert!(plain.as_element().is_some_and(|e| e.style.is_empty()));
        assert_eq!(
            colored.as_element().map(|e| e.style.clone()),
            Some(style! { "color" => "red" })
        );
    }

    #[test]
    fn test_style_rules_chain_then_caller() {
        let tw = Tw::new();
        let box_ = tw
            .div()
            .empty()
            .with_style(style! { "color" => "red", "margin" => "0" })
            .with_style(StyleRule::computed(|props| {
                let mut style = Style::new();
                if let Some(PropValue::Number(z)) = props.get("$z") {
                    style.insert("zIndex", sarto_carton::format_number(*z).into());
                }
                style.insert("color", "blue".into());
                style
            }));

        let node = box_.render(
            props! { "$z" => 3, "style" => style! { "margin" => "4px" } },
            vec![],
        );
        let element = node.as_element().unwrap();
        assert_eq!(
            element.style,
            style! { "color" => "blue", "margin" => "4px", "zIndex" => "3" }
        );
        assert!(element.attr("$z").is_none());
    }

    #[test]
    fn test_with_props_display_name() {
        let bound = Tw::new().button().classes("btn").with_props(props! { "type" => "button" });
        assert_eq!(bound.display_name(), "tw.button.withProps");
        assert_eq!(bound.defaults().get("type"), Some(&PropValue::from("button")));
    }
}
