//! Configuration file loading for sarto.
//!
//! Reads `sarto.config.json` from the current working directory, or from
//! an explicit path. Also provides the JSON Schema for editor
//! autocompletion.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use sarto_atelier_core::{default_merger, ClassMerge, DedupMerge, GroupMerge, Tw};
use sarto_patina::Preset;
use sarto_vitrine::Framework;
use serde::{Deserialize, Serialize};

use crate::error::SartoError;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "sarto.config.json";

/// Top-level sarto configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SartoConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Host whose conventions `render` follows.
    #[serde(default)]
    pub framework: Framework,

    /// Class merging configuration.
    #[serde(default)]
    pub merge: MergeConfig,

    /// Schema lint configuration.
    #[serde(default)]
    pub lint: LintConfig,
}

/// How class tokens are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// The built-in Tailwind conflict table, extended by any configured groups.
    #[default]
    Tailwind,
    /// Drop exact duplicates, keeping the last occurrence.
    Dedup,
    /// Resolve conflicts between the configured utility groups only.
    Groups,
}

/// Configuration for class merging.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MergeConfig {
    #[serde(default)]
    pub strategy: MergeStrategy,

    /// Conflict groups: group name to utility prefixes
    /// (e.g. `{"padding-x": ["px-"]}`). Ignored by the `dedup` strategy.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub groups: BTreeMap<String, Vec<String>>,
}

impl MergeConfig {
    fn group_merge(&self, table: GroupMerge) -> GroupMerge {
        self.groups
            .iter()
            .fold(table, |merge, (name, prefixes)| {
                merge.group(name.as_str(), prefixes.iter().map(String::as_str))
            })
    }

    /// The configured merger.
    pub fn merger(&self) -> Arc<dyn ClassMerge> {
        match self.strategy {
            MergeStrategy::Tailwind if self.groups.is_empty() => default_merger(),
            MergeStrategy::Tailwind => Arc::new(self.group_merge(GroupMerge::tailwind())),
            MergeStrategy::Dedup => Arc::new(DedupMerge),
            MergeStrategy::Groups => Arc::new(self.group_merge(GroupMerge::new())),
        }
    }
}

/// Configuration for the `check` command.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LintConfig {
    #[serde(default)]
    pub preset: Preset,
}

impl SartoConfig {
    /// A factory for the configured host and merge strategy.
    #[inline]
    pub fn tw(&self) -> Tw {
        self.tw_for(self.framework)
    }

    /// A factory for `framework` with the configured merge strategy.
    pub fn tw_for(&self, framework: Framework) -> Tw {
        let tw = framework.tw();
        match self.merge.strategy {
            MergeStrategy::Tailwind if self.merge.groups.is_empty() => tw,
            MergeStrategy::Tailwind => {
                tw.with_merger(self.merge.group_merge(GroupMerge::tailwind()))
            }
            MergeStrategy::Dedup => tw.with_merger(DedupMerge),
            MergeStrategy::Groups => tw.with_merger(self.merge.group_merge(GroupMerge::new())),
        }
    }
}

/// Load the configuration.
///
/// With an explicit `path` the file must exist. Without one,
/// `sarto.config.json` is looked up in the current directory and a missing
/// file yields the defaults. A file that fails to parse is reported and
/// replaced by the defaults.
pub fn load_config(path: Option<&Path>) -> Result<SartoConfig, SartoError> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let base = std::env::current_dir().unwrap_or_default();
            let candidate = base.join(CONFIG_FILE_NAME);
            if !candidate.exists() {
                tracing::debug!(path = %candidate.display(), "no config file, using defaults");
                return Ok(SartoConfig::default());
            }
            candidate
        }
    };

    let content = std::fs::read_to_string(&config_path)
        .map_err(|source| SartoError::io(config_path.clone(), source))?;
    Ok(parse_config(&content, &config_path))
}

fn parse_config(content: &str, config_path: &Path) -> SartoConfig {
    match serde_json::from_str(content) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                path = %config_path.display(),
                error = %e,
                "failed to parse config, using defaults"
            );
            SartoConfig::default()
        }
    }
}

/// JSON Schema for `sarto.config.json`.
pub const SARTO_CONFIG_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Sarto Configuration",
  "description": "Configuration file for sarto - styled-components-like class composition",
  "type": "object",
  "properties": {
    "$schema": {
      "type": "string",
      "description": "JSON Schema reference for editor autocompletion"
    },
    "framework": {
      "type": "string",
      "description": "Host whose conventions rendering follows",
      "enum": ["neutral", "react", "solid", "vue"],
      "default": "neutral"
    },
    "merge": {
      "type": "object",
      "description": "Class merging configuration",
      "properties": {
        "strategy": {
          "type": "string",
          "description": "tailwind resolves conflicts with the built-in Tailwind table plus configured groups; dedup drops exact duplicates; groups uses the configured groups only",
          "enum": ["tailwind", "dedup", "groups"],
          "default": "tailwind"
        },
        "groups": {
          "type": "object",
          "description": "Conflict groups: group name to utility prefixes",
          "additionalProperties": {
            "type": "array",
            "items": { "type": "string", "minLength": 1 }
          },
          "examples": [
            { "bg-color": ["bg-"], "padding-x": ["px-", "p-"] }
          ]
        }
      },
      "additionalProperties": false
    },
    "lint": {
      "type": "object",
      "description": "Schema lint configuration",
      "properties": {
        "preset": {
          "type": "string",
          "enum": ["recommended", "all"],
          "default": "recommended"
        }
      },
      "additionalProperties": false
    }
  },
  "additionalProperties": false
}"#;
