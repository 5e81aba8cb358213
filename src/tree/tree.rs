//! Regression tree fitted by greedy squared-error splitting.

use crate::config::TreeConfig;
use crate::core::error::{GbrtError, Result};
use crate::core::traits::Regressor;
use crate::core::types::{DataIndex, Label, Score};
use crate::dataset::{ensure_finite_matrix, Dataset};
use crate::tree::builder::TreeBuilder;
use crate::tree::node::Node;
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};
use std::fmt;

/// A binary regression tree.
///
/// The whole tree is built eagerly by the constructor and never changes
/// afterwards. Every node predicts the mean target of the training rows that
/// reach it.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionTree {
    root: Node,
    num_features: usize,
    min_samples_leaf: usize,
    max_depth: usize,
}

impl RegressionTree {
    /// Fit a tree on every row of `dataset`.
    pub fn new(dataset: &Dataset<'_>, config: &TreeConfig) -> Result<Self> {
        Self::with_indices(dataset, config, (0..dataset.num_data()).collect())
    }

    /// Fit a tree on the rows listed in `indices`.
    ///
    /// Indices may repeat (as in a bootstrap sample) but must all be in range,
    /// and at least one is required.
    pub fn with_indices(
        dataset: &Dataset<'_>,
        config: &TreeConfig,
        indices: Vec<DataIndex>,
    ) -> Result<Self> {
        let max_depth = config.depth_limit()?;
        if indices.is_empty() {
            return Err(GbrtError::degenerate_data(
                "cannot build a tree from an empty sample set",
            ));
        }
        dataset.check_indices(&indices)?;

        let root = TreeBuilder::new(*dataset, config).build(indices, max_depth)?;
        let tree = RegressionTree {
            root,
            num_features: dataset.num_features(),
            min_samples_leaf: config.min_samples_leaf,
            max_depth,
        };

        log::debug!(
            "Built regression tree: {} samples, {} leaves, depth {}",
            tree.root.count(),
            tree.num_leaves(),
            tree.depth()
        );
        Ok(tree)
    }

    /// Validate `features` and `target` as a dataset and fit a tree on it.
    pub fn fit<'a>(
        features: ArrayView2<'a, f64>,
        target: ArrayView1<'a, Label>,
        config: &TreeConfig,
    ) -> Result<Self> {
        let dataset = Dataset::new(features, target)?;
        Self::new(&dataset, config)
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Prediction of the root node: the mean target of the training rows.
    pub fn value(&self) -> Score {
        self.root.value()
    }

    /// Number of feature columns seen during training.
    pub fn num_features(&self) -> usize {
        self.num_features
    }

    /// Configured minimum number of samples per leaf.
    pub fn min_samples_leaf(&self) -> usize {
        self.min_samples_leaf
    }

    /// Configured maximum depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Actual depth of the fitted tree.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of leaves.
    pub fn num_leaves(&self) -> usize {
        self.root.num_leaves()
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.root.num_nodes()
    }

    /// Leaves from left to right.
    pub fn leaves(&self) -> Vec<&Node> {
        self.root.leaves()
    }

    /// Predict a single row.
    pub fn predict_row(&self, row: ArrayView1<'_, f64>) -> Result<Score> {
        if row.len() != self.num_features {
            return Err(GbrtError::dimension_mismatch(
                format!("{} features", self.num_features),
                format!("{} features", row.len()),
            ));
        }
        if let Some((i, &v)) = row.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(GbrtError::non_finite("prediction row", i, v));
        }
        Ok(self.root.predict_row(row))
    }

    /// Predict every row of `features`, preserving row order.
    pub fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Array1<Score>> {
        if features.ncols() != self.num_features {
            return Err(GbrtError::dimension_mismatch(
                format!("{} feature columns", self.num_features),
                format!("{} feature columns", features.ncols()),
            ));
        }
        ensure_finite_matrix(features, "prediction features")?;

        Ok(features
            .axis_iter(Axis(0))
            .map(|row| self.root.predict_row(row))
            .collect())
    }
}

impl Regressor for RegressionTree {
    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Array1<Score>> {
        RegressionTree::predict(self, features)
    }
}

impl fmt::Display for RegressionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
