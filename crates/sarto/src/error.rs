//! Errors surfaced by the `sarto` binary.

use std::path::PathBuf;

use sarto_atelier_core::{SchemaError, VarianceError};
use sarto_vitrine::UnknownFramework;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SartoError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },

    #[error("invalid --props: {0}")]
    Props(#[source] SchemaError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Variance(#[from] VarianceError),

    #[error(transparent)]
    UnknownFramework(#[from] UnknownFramework),

    #[error("`{0}` is not a renderable element")]
    BadTag(String),
}

impl SartoError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
