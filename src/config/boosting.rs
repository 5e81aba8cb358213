//! Gradient boosting configuration.

use crate::config::tree::TreeConfig;
use crate::core::constants::*;
use crate::core::error::{GbrtError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Hyperparameters for a boosted ensemble of regression trees.
///
/// The tree settings are shared by every stage of the ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostingConfig {
    /// Number of boosting stages (trees); 0 yields a constant model
    pub n_trees: usize,
    /// Shrinkage applied to every tree's contribution, in (0, 1]
    pub learning_rate: f64,
    /// Maximum depth of every weak learner
    pub max_depth: i32,
    /// Minimum samples on each side of a weak learner's split
    pub min_samples_leaf: usize,
    /// Search split features concurrently with rayon
    pub parallel_features: bool,
}

impl Default for BoostingConfig {
    fn default() -> Self {
        BoostingConfig {
            n_trees: DEFAULT_N_TREES,
            learning_rate: DEFAULT_LEARNING_RATE,
            max_depth: DEFAULT_BOOSTING_MAX_DEPTH,
            min_samples_leaf: DEFAULT_BOOSTING_MIN_SAMPLES_LEAF,
            parallel_features: false,
        }
    }
}

impl BoostingConfig {
    /// Create a validated configuration with the default weak learner leaf size.
    pub fn new(n_trees: usize, learning_rate: f64, max_depth: i32) -> Result<Self> {
        let config = BoostingConfig {
            n_trees,
            learning_rate,
            max_depth,
            ..BoostingConfig::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        self.validate_learning_rate()?;
        self.tree_config().validate()
    }

    /// Validate only the ensemble-level settings, leaving the weak learner
    /// fields unchecked.
    pub fn validate_learning_rate(&self) -> Result<()> {
        crate::ensure!(
            self.learning_rate.is_finite()
                && self.learning_rate > 0.0
                && self.learning_rate <= 1.0,
            GbrtError::invalid_parameter(
                "learning_rate",
                self.learning_rate.to_string(),
                "must be in range (0.0, 1.0]",
            )
        );
        Ok(())
    }

    /// Configuration handed to every weak learner.
    pub fn tree_config(&self) -> TreeConfig {
        TreeConfig {
            min_samples_leaf: self.min_samples_leaf,
            max_depth: self.max_depth,
            parallel_features: self.parallel_features,
        }
    }

    /// Load configuration from a `.toml` or `.json` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: BoostingConfig = super::load_from_path(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a `.toml` or `.json` file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        super::save_to_path(self, path.as_ref())
    }
}

/// Fluent builder for [`BoostingConfig`].
#[derive(Debug, Clone, Default)]
pub struct BoostingConfigBuilder {
    config: BoostingConfig,
    validation_errors: Vec<String>,
}

impl BoostingConfigBuilder {
    /// Create a new builder starting from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of boosting stages
    pub fn n_trees(mut self, n_trees: usize) -> Self {
        self.config.n_trees = n_trees;
        self
    }

    /// Set the learning rate
    pub fn learning_rate(mut self, rate: f64) -> Self {
        if !rate.is_finite() || rate <= 0.0 || rate > 1.0 {
            self.validation_errors
                .push("learning_rate must be in range (0.0, 1.0]".to_string());
        }
        self.config.learning_rate = rate;
        self
    }

    /// Set the maximum depth of every weak learner
    pub fn max_depth(mut self, depth: i32) -> Self {
        if depth < 0 {
            self.validation_errors
                .push("max_depth must be nonnegative".to_string());
        }
        self.config.max_depth = depth;
        self
    }

    /// Set the minimum leaf size of every weak learner
    pub fn min_samples_leaf(mut self, samples: usize) -> Self {
        if samples == 0 {
            self.validation_errors
                .push("min_samples_leaf must be positive".to_string());
        }
        self.config.min_samples_leaf = samples;
        self
    }

    /// Enable or disable feature-parallel split search
    pub fn parallel_features(mut self, parallel: bool) -> Self {
        self.config.parallel_features = parallel;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<BoostingConfig> {
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
