//! Host selection by name.

use std::fmt;
use std::str::FromStr;

use sarto_atelier_core::{NeutralHost, Tw};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A supported UI host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    Neutral,
    #[cfg(feature = "react")]
    React,
    #[cfg(feature = "solid")]
    Solid,
    #[cfg(feature = "vue")]
    Vue,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown framework `{0}`")]
pub struct UnknownFramework(pub String);

impl Framework {
    pub const ALL: &'static [Framework] = &[
        Framework::Neutral,
        #[cfg(feature = "react")]
        Framework::React,
        #[cfg(feature = "solid")]
        Framework::Solid,
        #[cfg(feature = "vue")]
        Framework::Vue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            #[cfg(feature = "react")]
            Self::React => "react",
            #[cfg(feature = "solid")]
            Self::Solid => "solid",
            #[cfg(feature = "vue")]
            Self::Vue => "vue",
        }
    }

    /// A fresh factory using this host's conventions.
    pub fn tw(&self) -> Tw {
        match self {
            Self::Neutral => Tw::new().with_host(NeutralHost),
            #[cfg(feature = "react")]
            Self::React => Tw::new().with_host(crate::react::ReactHost),
            #[cfg(feature = "solid")]
            Self::Solid => Tw::new().with_host(crate::solid::SolidHost),
            #[cfg(feature = "vue")]
            Self::Vue => Tw::new().with_host(crate::vue::VueHost),
        }
    }
}

impl FromStr for Framework {
    type Err = UnknownFramework;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|framework| framework.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFramework(s.to_string()))
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
