//! Class composition and variant resolution for Sarto.
//!
//! This crate is the host-neutral engine behind every Sarto adapter:
//! - class templates and the class-token merger (`merge_arrays`, `clean_template`)
//! - the transient-prop filter (`$`-prefixed props are never forwarded)
//! - the variance resolver (`cva`), with compound and default variants
//! - polymorphic "render as" resolution (`$as`)
//! - the styled-component factory, with `with_style` and `with_props` chaining
//!
//! Rendering produces a neutral [`VNode`] tree; how a host names its class
//! prop, forwards refs and merges default props is supplied by a
//! [`HostConvention`].
//!
//! ## Name Origin
//!
//! **Atelier** (/ˌætəlˈjeɪ/) is an artist's workshop or studio. The core
//! atelier is where garments are cut: every class string Sarto produces is
//! composed here before an adapter dresses it for its host.

pub mod errors;
pub mod factory;
pub mod host;
pub mod json;
pub mod merge;
pub mod node;
pub mod polymorphic;
pub mod schema;
pub mod styled;
mod tailwind;
pub mod target;
pub mod template;
pub mod transient;
pub mod value;
pub mod variance;

pub use errors::*;
pub use factory::*;
pub use host::*;
pub use json::*;
pub use merge::*;
pub use node::*;
pub use polymorphic::*;
pub use schema::*;
pub use styled::*;
pub use target::*;
pub use template::*;
pub use transient::*;
pub use value::*;
pub use variance::*;

// Re-exported for the `props!`/`style!` macros
pub use sarto_carton::CompactString;
