//! Configuration management for trees and boosted ensembles.
//!
//! Both configurations are plain `serde` structs with validated builders, and
//! both can be read from or written to TOML or JSON files. The file format is
//! picked from the extension.

pub mod boosting;
pub mod tree;

pub use boosting::{BoostingConfig, BoostingConfigBuilder};
pub use tree::{TreeConfig, TreeConfigBuilder};

use crate::core::error::{GbrtError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigFormat {
    /// TOML configuration format
    Toml,
    /// JSON configuration format
    Json,
}

impl ConfigFormat {
    /// Determine the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(crate::config_error!(
                "Unsupported config file format for {}. Use .json or .toml",
                path.display()
            )),
        }
    }
}

pub(crate) fn load_from_path<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;

    let parsed = match format {
        ConfigFormat::Toml => toml::from_str(&content).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
    };
    let config = parsed.map_err(|message| {
        GbrtError::serialization(format!("cannot parse {}: {}", path.display(), message))
    })?;

    log::debug!("Loaded {:?} configuration from {}", format, path.display());
    Ok(config)
}

pub(crate) fn save_to_path<T: Serialize>(config: &T, path: &Path) -> Result<()> {
    let content = match ConfigFormat::from_path(path)? {
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
    };

    std::fs::write(path, content)?;
    Ok(())
}
