//! Vitrine - The display case for Sarto.
//!
//! Thin adapters that present the shared engine under each UI host's
//! conventions. An adapter only decides:
//! - which prop carries classes (`className` for React, `class` otherwise)
//! - whether refs are forwarded (not for Vue, which handles them itself)
//! - how bound default props merge with the caller's
//!
//! Every adapter exposes a lazily-initialized factory:
//!
//! ```
//! use sarto_atelier_core::props;
//! use sarto_vitrine::react;
//!
//! let title = react::tw().h1().classes("text-2xl");
//! let node = title.render(props! { "className" => "mb-4" }, vec![]);
//! assert_eq!(node.as_element().unwrap().class, "text-2xl mb-4");
//! ```
//!
//! ## Name Origin
//!
//! **Vitrine** (/vɪˈtriːn/) is a glass display case. The garments are cut in
//! the atelier; the vitrine presents them to each audience.

pub mod framework;

#[cfg(feature = "react")]
pub mod react;
#[cfg(feature = "solid")]
pub mod solid;
#[cfg(feature = "vue")]
pub mod vue;

pub use framework::*;
