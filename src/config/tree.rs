//! Regression tree configuration.

use crate::core::constants::*;
use crate::core::error::{GbrtError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Hyperparameters for a single regression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Minimum number of samples required on each side of a split
    pub min_samples_leaf: usize,
    /// Maximum depth of the tree; 0 builds a single leaf
    pub max_depth: i32,
    /// Search split features concurrently with rayon
    pub parallel_features: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            min_samples_leaf: DEFAULT_MIN_SAMPLES_LEAF,
            max_depth: DEFAULT_MAX_DEPTH,
            parallel_features: false,
        }
    }
}

impl TreeConfig {
    /// Create a validated configuration.
    pub fn new(min_samples_leaf: usize, max_depth: i32) -> Result<Self> {
        let config = TreeConfig {
            min_samples_leaf,
            max_depth,
            ..TreeConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(
            self.min_samples_leaf > 0,
            GbrtError::invalid_parameter(
                "min_samples_leaf",
                self.min_samples_leaf.to_string(),
                "must be positive",
            )
        );

        crate::ensure!(
            self.max_depth >= 0,
            GbrtError::invalid_parameter(
                "max_depth",
                self.max_depth.to_string(),
                "must be nonnegative",
            )
        );

        Ok(())
    }

    /// Validated depth limit.
    pub fn depth_limit(&self) -> Result<usize> {
        self.validate()?;
        Ok(self.max_depth as usize)
    }

    /// Load configuration from a `.toml` or `.json` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: TreeConfig = super::load_from_path(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a `.toml` or `.json` file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        super::save_to_path(self, path.as_ref())
    }
}

/// Fluent builder for [`TreeConfig`].
#[derive(Debug, Clone, Default)]
pub struct TreeConfigBuilder {
    config: TreeConfig,
    validation_errors: Vec<String>,
}

impl TreeConfigBuilder {
    /// Create a new builder starting from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum number of samples per leaf
    pub fn min_samples_leaf(mut self, samples: usize) -> Self {
        if samples == 0 {
            self.validation_errors
                .push("min_samples_leaf must be positive".to_string());
        }
        self.config.min_samples_leaf = samples;
        self
    }

    /// Set the maximum tree depth
    pub fn max_depth(mut self, depth: i32) -> Self {
        if depth < 0 {
            self.validation_errors
                .push("max_depth must be nonnegative".to_string());
        }
        self.config.max_depth = depth;
        self
    }

    /// Enable or disable feature-parallel split search
    pub fn parallel_features(mut self, parallel: bool) -> Self {
        self.config.parallel_features = parallel;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<TreeConfig> {
        if !self.validation_errors.is_empty() {
            return Err(GbrtError::config(format!(
                "Configuration validation failed: {}",
                self.validation_errors.join(", ")
            )));
        }

        self.config.validate()?;
        Ok(self.config)
    }
}
