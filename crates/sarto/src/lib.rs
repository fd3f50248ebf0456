//! # Sarto
//!
//! Styled-components-like class composition written in Rust.
//!
//! This crate re-exports all Sarto sub-crates for unified documentation,
//! and owns the project configuration used by the `sarto` binary.
//!
//! ## Crates
//!
//! - [`carton`] - Ordered records, string helpers and DOM tables
//! - [`atelier_core`] - Class templates, variants and the styled factory
//! - [`atelier_ssr`] - HTML serialization of rendered nodes
//! - [`vitrine`] - React, Solid and Vue host conventions
//! - [`patina`] - Variant schema linter
//!
//! ## Name Origin
//!
//! **Sarto** (/ˈsarto/) is Italian for tailor. Components are cut from a
//! shared pattern (the variant schema) and fitted per render to the props
//! the caller brings.

/// Ordered records, string helpers and DOM tables.
pub use sarto_carton as carton;

/// Class templates, variants and the styled factory.
pub use sarto_atelier_core as atelier_core;

/// HTML serialization of rendered nodes.
pub use sarto_atelier_ssr as atelier_ssr;

/// React, Solid and Vue host conventions.
pub use sarto_vitrine as vitrine;

/// Variant schema linter.
pub use sarto_patina as patina;

pub mod config;
pub mod error;
pub mod source;

pub use config::{load_config, SartoConfig, SARTO_CONFIG_SCHEMA};
pub use error::SartoError;
pub use source::{parse_props, read_definition};
