//! Error types for sarto_atelier_core.
//!
//! Normal resolution never fails. These errors only surface from the opt-in
//! strict resolver and from decoding schemas/props out of JSON.

use sarto_carton::CompactString;
use thiserror::Error;

/// Errors from [`Variance::resolve_strict`](crate::Variance::resolve_strict).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VarianceError {
    /// A prop selected an option its variant group does not declare
    #[error("unknown option `{option}` for variant group `{group}`")]
    UnknownOption {
        group: CompactString,
        option: CompactString,
    },
}

/// Errors that can occur while decoding a schema or a props record
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The document root must be a JSON object
    #[error("expected a JSON object")]
    NotAnObject,

    /// Malformed JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
