//! SSR render options.

use sarto_carton::CompactString;
use serde::{Deserialize, Serialize};

/// SSR render options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsrOptions {
    /// Scope ID added as a bare attribute to every element (data-v-xxx)
    #[serde(default)]
    pub scope_id: Option<CompactString>,

    /// Keep style keys as written instead of converting camelCase to kebab-case
    #[serde(default)]
    pub raw_style_keys: bool,
}
