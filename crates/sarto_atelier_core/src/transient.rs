//! Transient props.
//!
//! Props whose name starts with `$` configure styling and are never forwarded
//! to an intrinsic element.

use crate::value::Props;

/// Prefix marking a transient prop.
pub const TRANSIENT_SIGIL: char = '$';

/// The polymorphic "render as" prop.
pub const AS_PROP: &str = "$as";

/// Whether a prop with this name may reach the rendered element.
#[inline]
pub fn is_forwardable(name: &str) -> bool {
    !name.starts_with(TRANSIENT_SIGIL)
}

/// Drop every transient prop from `props`.
#[inline]
pub fn strip_transient(props: &mut Props) {
    props.retain(|name, _| is_forwardable(name));
}
