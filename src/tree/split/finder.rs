//! Exact split search over sorted feature values.
//!
//! For each feature the node's rows are sorted once and scanned left to
//! right, carrying running target sums so that every candidate boundary is
//! scored in constant time.

use super::Split;
use crate::core::types::{DataIndex, FeatureIndex, FeatureValue};
use crate::dataset::Dataset;
use rayon::prelude::*;

/// Finds the best admissible split of a node's samples.
#[derive(Debug, Clone, Copy)]
pub struct SplitFinder<'a> {
    dataset: Dataset<'a>,
    min_samples_leaf: usize,
}

impl<'a> SplitFinder<'a> {
    /// Creates a split finder over `dataset`.
    pub fn new(dataset: Dataset<'a>, min_samples_leaf: usize) -> Self {
        SplitFinder {
            dataset,
            min_samples_leaf,
        }
    }

    /// Best split of `samples` over all features, or `None` if no candidate
    /// reduces the squared error while keeping `min_samples_leaf` rows on
    /// both sides.
    ///
    /// With `parallel` set, features are scanned on the rayon pool; the
    /// result is identical to the serial scan.
    pub fn best_split(&self, samples: &[DataIndex], parallel: bool) -> Option<Split> {
        let sum_y = self.dataset.target_sum(samples);
        let num_features = self.dataset.num_features();

        if parallel {
            (0..num_features)
                .into_par_iter()
                .filter_map(|feature| self.best_split_for_feature(feature, samples, sum_y))
                .reduce_with(|a, b| if b.beats(&a) { b } else { a })
        } else {
            let mut best: Option<Split> = None;
            for feature in 0..num_features {
                if let Some(candidate) = self.best_split_for_feature(feature, samples, sum_y) {
                    if best.map_or(true, |b| candidate.score < b.score) {
                        best = Some(candidate);
                    }
                }
            }
            best
        }
    }

    /// Best split of `samples` on a single feature.
    ///
    /// `sum_y` must be the target sum over `samples`.
    pub fn best_split_for_feature(
        &self,
        feature: FeatureIndex,
        samples: &[DataIndex],
        sum_y: f64,
    ) -> Option<Split> {
        let n = samples.len();
        let min_leaf = self.min_samples_leaf.max(1);
        // Both sides need `min_leaf` rows.
        if min_leaf > n / 2 {
            return None;
        }

        // Stable, so equal values keep their sample order.
        let mut order = samples.to_vec();
        order.sort_by(|&a, &b| {
            self.dataset
                .feature_value(a, feature)
                .total_cmp(&self.dataset.feature_value(b, feature))
        });

        let parent_term = sum_y * sum_y / n as f64;
        let mut sum_left = 0.0;
        let mut best: Option<Split> = None;

        for i in 0..(n - min_leaf) {
            let row = order[i];
            sum_left += self.dataset.label(row);
            let count_left = i + 1;
            if count_left < min_leaf {
                continue;
            }

            let value = self.dataset.feature_value(row, feature);
            let next = self.dataset.feature_value(order[i + 1], feature);
            if value == next {
                continue;
            }

            let count_right = n - count_left;
            let sum_right = sum_y - sum_left;
            let score = -(sum_left * sum_left / count_left as f64)
                - (sum_right * sum_right / count_right as f64)
                + parent_term;

            // Admissible only if the split reduces squared error.
            if score < best.map_or(0.0, |b| b.score) {
                best = Some(Split {
                    feature,
                    threshold: midpoint(value, next),
                    score,
                    left_count: count_left,
                    right_count: count_right,
                });
            }
        }

        best
    }
}

/// Midpoint of two adjacent sorted values, clamped into `[low, high)` so the
/// threshold always separates them.
fn midpoint(low: FeatureValue, high: FeatureValue) -> FeatureValue {
    let mid = low / 2.0 + high / 2.0;
    if mid >= low && mid < high {
        mid
    } else {
        low
    }
}
