//! Trait seams between the ensemble and its weak learners.
//!
//! The boosting loop never looks inside a tree: it fits a learner on a
//! residual dataset and asks the result for predictions.

use crate::core::error::Result;
use crate::core::types::Score;
use crate::dataset::Dataset;
use ndarray::{Array1, ArrayView2};

/// A fitted model that maps feature rows to real-valued predictions.
pub trait Regressor {
    /// Predict one value per row of `features`, preserving row order.
    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Array1<Score>>;
}

/// Something that can be trained on a dataset to produce a [`Regressor`].
pub trait WeakLearner {
    /// Model produced by [`WeakLearner::fit`].
    type Model: Regressor + std::fmt::Debug;

    /// Fit a fresh model to `dataset`.
    ///
    /// Must be a deterministic function of the dataset.
    fn fit(&self, dataset: &Dataset<'_>) -> Result<Self::Model>;

    /// Short name used in log messages.
    fn name(&self) -> &'static str;
}
