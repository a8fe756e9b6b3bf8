//! Read-only site configuration (`_config.yml`)

use serde::Deserialize;

use super::scalar_text;
use crate::error::{self, Result};

/// The parts of the site configuration microblog reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub microblog: Option<MicroblogSettings>,
}

/// `microblog:` section of the site configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MicroblogSettings {
    /// Kept as YAML so unquoted names like `2024` still load
    #[serde(default)]
    pub collection: Option<serde_yaml::Value>,
}

impl SiteConfig {
    /// Parse configuration text; blank or comment-only text is an empty config
    pub fn from_yaml(path: &str, yaml: &str) -> Result<Self> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| error::config::parse_failed(path, e.to_string()))?;
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_yaml::from_value(value).map_err(|e| error::config::parse_failed(path, e.to_string()))
    }

    /// Collection configured for microposts, if any
    pub fn microblog_collection(&self) -> Option<String> {
        self.microblog
            .as_ref()
            .and_then(|m| m.collection.as_ref())
            .and_then(scalar_text)
            .filter(|name| !name.is_empty())
    }
}
