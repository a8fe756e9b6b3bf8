//! Site configuration handling
//!
//! This module contains:
//! - [`site`]: the read-only view of `_config.yml` used when posting
//! - [`patcher`]: the line-preserving editor used by setup

pub mod patcher;
pub mod site;

pub use patcher::ensure_collection_configured;
pub use site::SiteConfig;

/// Site configuration filename
pub const CONFIG_FILE: &str = "_config.yml";

/// Collection used when setup receives an empty name
pub const DEFAULT_COLLECTION: &str = "microposts";

/// Text of a YAML scalar as it was written for plain names.
///
/// Setup writes names unquoted, so `2024` or `true` come back as numbers or
/// booleans.
pub fn scalar_text(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
