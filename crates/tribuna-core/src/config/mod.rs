pub mod defaults;
pub mod highlight_config;
pub mod topics_config;

pub use highlight_config::{HighlightConfig, HighlightWeights};
pub use topics_config::TopicsConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{TribunaError, TribunaResult};

/// Aggregate configuration for the highlight core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TribunaConfig {
    pub highlight: HighlightConfig,
    pub topics: TopicsConfig,
}

impl TribunaConfig {
    /// Parse a config from TOML text. Missing fields take their defaults.
    pub fn from_toml_str(text: &str) -> TribunaResult<Self> {
        toml::from_str(text).map_err(|e| TribunaError::Config {
            reason: e.to_string(),
        })
    }
}
