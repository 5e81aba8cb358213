//! # gbrt-rust
//!
//! Exact-split regression trees and squared-error gradient boosting in pure
//! Rust.
//!
//! ## Features
//!
//! - **Regression trees**: greedy top-down construction that minimizes the
//!   squared error of every split, bounded by `max_depth` and
//!   `min_samples_leaf`.
//! - **Gradient boosting**: forward-stagewise fitting of shallow trees to
//!   residuals with shrinkage.
//! - **Parallel split search**: optional feature-parallel split evaluation
//!   with Rayon that picks exactly the split the serial scan picks.
//! - **Configuration files**: tree and boosting settings load from and save
//!   to TOML or JSON.
//!
//! ## Quick Start
//!
//! ```rust
//! use gbrt_rust::{BoostingConfig, GradientBoosting, RegressionTree, TreeConfig};
//! use ndarray::{array, Array2};
//!
//! # fn main() -> gbrt_rust::Result<()> {
//! let features = Array2::from_shape_fn((10, 1), |(i, _)| (i + 1) as f64);
//! let target = features.column(0).mapv(|v| if v <= 5.0 { 1.0 } else { 10.0 });
//!
//! // A single stump finds the step.
//! let tree = RegressionTree::fit(features.view(), target.view(), &TreeConfig::new(1, 1)?)?;
//! assert_eq!(tree.predict(array![[2.0], [8.0]].view())?, array![1.0, 10.0]);
//!
//! // An ensemble of stumps approaches it stage by stage.
//! let mut model = GradientBoosting::new(BoostingConfig::new(10, 0.3, 1)?)?;
//! model.fit(features.view(), target.view())?;
//! let predictions = model.predict(features.view())?;
//! assert!(predictions[0] < predictions[9]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: error handling, numeric types, defaults, and learner traits
//! - [`config`]: validated tree and boosting configuration
//! - [`dataset`]: borrowed, validated feature matrix and target views
//! - [`tree`]: split search, tree construction, and prediction
//! - [`boosting`]: the gradient boosted ensemble
//! - [`metrics`]: regression evaluation metrics

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module - always available
pub mod core;

// Configuration management module
pub mod config;

// Dataset views
pub mod dataset;

// Regression trees
pub mod tree;

// Gradient boosting
pub mod boosting;

// Evaluation metrics
pub mod metrics;

pub use core::{
    constants::*,
    error::{GbrtError, Result},
    traits::{Regressor, WeakLearner},
    types::*,
};

pub use config::{BoostingConfig, BoostingConfigBuilder, ConfigFormat, TreeConfig, TreeConfigBuilder};

pub use dataset::Dataset;

pub use tree::{Node, RegressionTree, RegressionTreeLearner, Split};

pub use boosting::GradientBoosting;

pub use metrics::{mean_squared_error, r2_score, root_mean_squared_error};

pub use core::constants::GBRT_RUST_VERSION as VERSION;

/// Initialize the library.
///
/// Installs the `env_logger` backend with an `info` default filter. Library
/// functions work without it; it only makes their log output visible.
///
/// # Example
///
/// ```rust
/// gbrt_rust::init();
/// ```
pub fn init() {
    core::initialize_logging();
}
