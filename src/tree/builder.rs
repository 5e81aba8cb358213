//! Top-down recursive tree construction.

use crate::config::TreeConfig;
use crate::core::error::{GbrtError, Result};
use crate::core::types::DataIndex;
use crate::dataset::Dataset;
use crate::tree::node::Node;
use crate::tree::split::SplitFinder;

/// Builds a subtree for a set of rows, recursing until depth runs out or no
/// admissible split remains.
#[derive(Debug)]
pub(crate) struct TreeBuilder<'a> {
    dataset: Dataset<'a>,
    finder: SplitFinder<'a>,
    parallel_features: bool,
}

impl<'a> TreeBuilder<'a> {
    pub(crate) fn new(dataset: Dataset<'a>, config: &TreeConfig) -> Self {
        TreeBuilder {
            dataset,
            finder: SplitFinder::new(dataset, config.min_samples_leaf),
            parallel_features: config.parallel_features,
        }
    }

    /// Build the node for `samples` with `depth_remaining` levels below it.
    pub(crate) fn build(&self, samples: Vec<DataIndex>, depth_remaining: usize) -> Result<Node> {
        let value = self.dataset.target_mean(&samples)?;

        // Pure nodes are always leaves.
        if depth_remaining == 0 || self.dataset.is_target_constant(&samples) {
            return Ok(Node::leaf(value, samples));
        }

        let split = match self.finder.best_split(&samples, self.parallel_features) {
            Some(split) => split,
            None => return Ok(Node::leaf(value, samples)),
        };

        let (left, right): (Vec<DataIndex>, Vec<DataIndex>) = samples
            .iter()
            .copied()
            .partition(|&row| split.goes_left(self.dataset.feature_value(row, split.feature)));

        if left.len() != split.left_count || right.len() != split.right_count {
            return Err(GbrtError::tree_construction(format!(
                "split on x{} <= {} partitioned {}/{} rows, expected {}/{}",
                split.feature,
                split.threshold,
                left.len(),
                right.len(),
                split.left_count,
                split.right_count
            )));
        }

        log::trace!(
            "split n={} on x{} <= {:.6} (sse reduction {:.6}) into {}/{}",
            samples.len(),
            split.feature,
            split.threshold,
            split.sse_reduction(),
            left.len(),
            right.len()
        );

        let left = self.build(left, depth_remaining - 1)?;
        let right = self.build(right, depth_remaining - 1)?;
        Ok(Node::internal(value, samples, split, left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_zero_depth_is_leaf() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![1.0, 2.0, 3.0, 6.0];
        let dataset = Dataset::new(x.view(), y.view()).unwrap();
        let config = TreeConfig::new(1, 0).unwrap();

        let node = TreeBuilder::new(dataset, &config).build(vec![0, 1, 2, 3], 0).unwrap();
        assert!(node.is_leaf());
        assert_eq!(node.value(), 3.0);
    }

    #[test]
    fn test_partition_preserves_order() {
        let x = array![[3.0], [1.0], [4.0], [2.0]];
        let y = array![9.0, 1.0, 9.0, 1.0];
        let dataset = Dataset::new(x.view(), y.view()).unwrap();
        let config = TreeConfig::new(1, 1).unwrap();

        let node = TreeBuilder::new(dataset, &config).build(vec![0, 1, 2, 3], 1).unwrap();
        let (left, right) = node.children().unwrap();
        assert_eq!(left.samples(), &[1, 3]);
        assert_eq!(right.samples(), &[0, 2]);
    }

    #[test]
    fn test_empty_samples_are_rejected() {
        let x = array![[1.0]];
        let y = array![1.0];
        let dataset = Dataset::new(x.view(), y.view()).unwrap();
        let config = TreeConfig::default();

        let err = TreeBuilder::new(dataset, &config).build(Vec::new(), 3).unwrap_err();
        assert!(matches!(err, GbrtError::DegenerateData { .. }));
    }
}
