//! Regression trees as weak learners for boosting.

use crate::config::TreeConfig;
use crate::core::error::Result;
use crate::core::traits::WeakLearner;
use crate::dataset::Dataset;
use crate::tree::tree::RegressionTree;

/// Fits a [`RegressionTree`] with a fixed configuration on each call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegressionTreeLearner {
    config: TreeConfig,
}

impl RegressionTreeLearner {
    /// Create a learner, validating `config`.
    pub fn new(config: TreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(RegressionTreeLearner { config })
    }

    /// Tree configuration used for every fit.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }
}

impl WeakLearner for RegressionTreeLearner {
    type Model = RegressionTree;

    fn fit(&self, dataset: &Dataset<'_>) -> Result<RegressionTree> {
        RegressionTree::new(dataset, &self.config)
    }

    fn name(&self) -> &'static str {
        "regression_tree"
    }
}
