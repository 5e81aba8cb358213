//! Split representation and exact split search.

pub mod finder;

pub use finder::SplitFinder;

use crate::core::types::{FeatureIndex, FeatureValue};

/// A winning (feature, threshold) pair together with its score.
///
/// `score` is the negated reduction of the sum of squared errors achieved by
/// the split, so lower is better and every admissible split has a negative
/// score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    /// Feature tested by the split
    pub feature: FeatureIndex,
    /// Rows with `value <= threshold` go left
    pub threshold: FeatureValue,
    /// Negated SSE reduction
    pub score: f64,
    /// Number of node samples sent left
    pub left_count: usize,
    /// Number of node samples sent right
    pub right_count: usize,
}

impl Split {
    /// Returns true if a row with `value` for this split's feature goes left.
    #[inline]
    pub fn goes_left(&self, value: FeatureValue) -> bool {
        value <= self.threshold
    }

    /// Reduction of the sum of squared errors achieved by the split.
    pub fn sse_reduction(&self) -> f64 {
        -self.score
    }

    /// Ordering used to merge per-feature results: lower score wins, and an
    /// equal score goes to the lower feature index, which is what a serial
    /// scan in feature order with strict improvement would pick.
    pub(crate) fn beats(&self, other: &Split) -> bool {
        self.score < other.score || (self.score == other.score && self.feature < other.feature)
    }
}
