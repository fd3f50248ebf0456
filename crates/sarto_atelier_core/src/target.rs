//! Render targets.
//!
//! A [`StyleTarget`] names what a styled component ultimately renders: an
//! intrinsic element, a component from the host application, or another
//! styled component. The `Styled` variant is the marker the polymorphic
//! resolver dispatches on.

use std::fmt;
use std::sync::Arc;

use sarto_carton::CompactString;

use crate::node::VNode;
use crate::styled::{StyledComponent, WithProps};
use crate::value::Props;

/// A renderable unit that was not built by Sarto.
pub trait ForeignComponent: Send + Sync {
    /// Name used for display and debugging.
    fn name(&self) -> &str;

    /// Render with the given props and children.
    fn render(&self, props: Props, children: Vec<VNode>) -> VNode;
}

/// A [`ForeignComponent`] backed by a closure.
pub struct FnComponent<F> {
    name: CompactString,
    render: F,
}

impl<F> ForeignComponent for FnComponent<F>
where
    F: Fn(Props, Vec<VNode>) -> VNode + Send + Sync,
{
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn render(&self, props: Props, children: Vec<VNode>) -> VNode {
        (self.render)(props, children)
    }
}

/// Wrap a closure as a foreign component target.
pub fn foreign<F>(name: impl Into<CompactString>, render: F) -> StyleTarget
where
    F: Fn(Props, Vec<VNode>) -> VNode + Send + Sync + 'static,
{
    StyleTarget::Foreign(Arc::new(FnComponent {
        name: name.into(),
        render,
    }))
}

/// What a styled component renders.
#[derive(Clone)]
pub enum StyleTarget {
    /// An intrinsic element such as `div` or `button`.
    Intrinsic(CompactString),
    /// A component not built by Sarto.
    Foreign(Arc<dyn ForeignComponent>),
    /// A previously built styled component.
    Styled(Arc<StyledComponent>),
}

impl StyleTarget {
    #[inline]
    pub fn intrinsic(tag: impl Into<CompactString>) -> Self {
        Self::Intrinsic(tag.into())
    }

    #[inline]
    pub fn is_styled(&self) -> bool {
        matches!(self, Self::Styled(_))
    }

    #[inline]
    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Self::Intrinsic(_))
    }

    #[inline]
    pub fn as_intrinsic(&self) -> Option<&str> {
        match self {
            Self::Intrinsic(tag) => Some(tag),
            _ => None,
        }
    }

    #[inline]
    pub fn as_styled(&self) -> Option<&StyledComponent> {
        match self {
            Self::Styled(styled) => Some(styled),
            _ => None,
        }
    }

    /// Human-readable name of the target.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Intrinsic(tag) => tag,
            Self::Foreign(component) => component.name(),
            Self::Styled(styled) => styled.display_name(),
        }
    }
}

impl PartialEq for StyleTarget {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Intrinsic(a), Self::Intrinsic(b)) => a == b,
            (Self::Foreign(a), Self::Foreign(b)) => {
                Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
            }
            (Self::Styled(a), Self::Styled(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for StyleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intrinsic(tag) => f.debug_tuple("Intrinsic").field(tag).finish(),
            Self::Foreign(component) => f.debug_tuple("Foreign").field(&component.name()).finish(),
            Self::Styled(styled) => f
                .debug_tuple("Styled")
                .field(&styled.display_name())
                .finish(),
        }
    }
}

impl From<&str> for StyleTarget {
    #[inline]
    fn from(tag: &str) -> Self {
        Self::Intrinsic(tag.into())
    }
}

impl From<String> for StyleTarget {
    #[inline]
    fn from(tag: String) -> Self {
        Self::Intrinsic(tag.into())
    }
}

impl From<StyledComponent> for StyleTarget {
    #[inline]
    fn from(styled: StyledComponent) -> Self {
        Self::Styled(Arc::new(styled))
    }
}

impl From<&StyledComponent> for StyleTarget {
    #[inline]
    fn from(styled: &StyledComponent) -> Self {
        Self::Styled(Arc::new(styled.clone()))
    }
}

impl From<Arc<StyledComponent>> for StyleTarget {
    #[inline]
    fn from(styled: Arc<StyledComponent>) -> Self {
        Self::Styled(styled)
    }
}

impl From<WithProps> for StyleTarget {
    #[inline]
    fn from(bound: WithProps) -> Self {
        Self::Styled(bound.into_inner())
    }
}
