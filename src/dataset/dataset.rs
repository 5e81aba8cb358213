//! Borrowed training data for tree and ensemble fitting.

use crate::core::error::{GbrtError, Result};
use crate::core::types::*;
use ndarray::{ArrayView1, ArrayView2};

/// A feature matrix and a parallel target vector, borrowed for the duration
/// of a fit.
///
/// Every node of a tree reads from the same `Dataset`; nodes only own the row
/// indices that reach them. Construction guarantees at least one row, matching
/// lengths, and finite values everywhere.
#[derive(Debug, Clone, Copy)]
pub struct Dataset<'a> {
    features: ArrayView2<'a, FeatureValue>,
    target: ArrayView1<'a, Label>,
}

impl<'a> Dataset<'a> {
    /// Create a dataset view, validating shape and values.
    pub fn new(
        features: ArrayView2<'a, FeatureValue>,
        target: ArrayView1<'a, Label>,
    ) -> Result<Self> {
        if features.nrows() == 0 {
            return Err(GbrtError::degenerate_data(
                "dataset has no rows; the target mean is undefined",
            ));
        }

        if target.len() != features.nrows() {
            return Err(GbrtError::dimension_mismatch(
                format!("target length {}", features.nrows()),
                format!("target length {}", target.len()),
            ));
        }

        ensure_finite_matrix(features, "features")?;
        if let Some((i, &v)) = target.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(GbrtError::non_finite("target", i, v));
        }

        Ok(Dataset { features, target })
    }

    /// Same features with a different target, as used for fitting residuals.
    ///
    /// Only the new target is validated; the features were checked when this
    /// dataset was created.
    pub fn with_target<'b>(&self, target: ArrayView1<'b, Label>) -> Result<Dataset<'b>>
    where
        'a: 'b,
    {
        if target.len() != self.num_data() {
            return Err(GbrtError::dimension_mismatch(
                format!("target length {}", self.num_data()),
                format!("target length {}", target.len()),
            ));
        }
        if let Some((i, &v)) = target.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(GbrtError::non_finite("target", i, v));
        }

        let features: ArrayView2<'b, FeatureValue> = self.features.reborrow();
        Ok(Dataset { features, target })
    }

    /// Number of rows.
    pub fn num_data(&self) -> usize {
        self.features.nrows()
    }

    /// Number of feature columns.
    pub fn num_features(&self) -> usize {
        self.features.ncols()
    }

    /// The feature matrix.
    pub fn features(&self) -> ArrayView2<'a, FeatureValue> {
        self.features
    }

    /// The target vector.
    pub fn target(&self) -> ArrayView1<'a, Label> {
        self.target
    }

    /// Value of `feature` at `row`.
    #[inline]
    pub fn feature_value(&self, row: DataIndex, feature: FeatureIndex) -> FeatureValue {
        self.features[[row, feature]]
    }

    /// Target value at `row`.
    #[inline]
    pub fn label(&self, row: DataIndex) -> Label {
        self.target[row]
    }

    /// Sum of the target over `indices`.
    pub fn target_sum(&self, indices: &[DataIndex]) -> f64 {
        indices.iter().map(|&i| self.target[i]).sum()
    }

    /// Arithmetic mean of the target over `indices`.
    ///
    /// An empty index set has no mean and is reported as degenerate data.
    pub fn target_mean(&self, indices: &[DataIndex]) -> Result<f64> {
        if indices.is_empty() {
            return Err(GbrtError::degenerate_data(
                "cannot take the target mean of an empty sample set",
            ));
        }
        Ok(self.target_sum(indices) / indices.len() as f64)
    }

    /// Returns true when every target value over `indices` is identical.
    pub fn is_target_constant(&self, indices: &[DataIndex]) -> bool {
        match indices.split_first() {
            Some((&first, rest)) => {
                let value = self.target[first];
                rest.iter().all(|&i| self.target[i] == value)
            }
            None => true,
        }
    }

    /// Check that every index refers to a row of this dataset.
    pub fn check_indices(&self, indices: &[DataIndex]) -> Result<()> {
        let length = self.num_data();
        match indices.iter().find(|&&i| i >= length) {
            Some(&index) => Err(GbrtError::index_out_of_bounds(index, length)),
            None => Ok(()),
        }
    }
}

/// Reject any NaN or infinite entry, reporting its flat row-major position.
pub fn ensure_finite_matrix(matrix: ArrayView2<'_, f64>, context: &str) -> Result<()> {
    let ncols = matrix.ncols();
    for ((row, col), &value) in matrix.indexed_iter() {
        if !value.is_finite() {
            return Err(GbrtError::non_finite(context, row * ncols + col, value));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1, Array2};

    #[test]
    fn test_dataset_creation() {
        let x = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let y = array![1.0, 2.0, 6.0];
        let dataset = Dataset::new(x.view(), y.view()).unwrap();

        assert_eq!(dataset.num_data(), 3);
        assert_eq!(dataset.num_features(), 2);
        assert_eq!(dataset.feature_value(2, 1), 6.0);
        assert_eq!(dataset.label(1), 2.0);
        assert_eq!(dataset.target_mean(&[0, 1, 2]).unwrap(), 3.0);
        assert_eq!(dataset.target_mean(&[2]).unwrap(), 6.0);
    }

    #[test]
    fn test_dataset_rejects_empty() {
        let x = Array2::<f64>::zeros((0, 3));
        let y = Array1::<f64>::zeros(0);
        let err = Dataset::new(x.view(), y.view()).unwrap_err();
        assert!(matches!(err, GbrtError::DegenerateData { .. }));
    }

    #[test]
    fn test_dataset_rejects_length_mismatch() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 2.0, 3.0];
        let err = Dataset::new(x.view(), y.view()).unwrap_err();
        assert!(matches!(err, GbrtError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_dataset_rejects_non_finite() {
        let x = array![[1.0, 2.0], [f64::NAN, 4.0]];
        let y = array![1.0, 2.0];
        match Dataset::new(x.view(), y.view()).unwrap_err() {
            GbrtError::NonFiniteValue { position, .. } => assert_eq!(position, 2),
            other => panic!("unexpected error: {other}"),
        }

        let x = array![[1.0], [2.0]];
        let y = array![1.0, f64::INFINITY];
        let err = Dataset::new(x.view(), y.view()).unwrap_err();
        assert!(matches!(err, GbrtError::NonFiniteValue { .. }));
    }

    #[test]
    fn test_with_target_swaps_target_only() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 3.0];
        let dataset = Dataset::new(x.view(), y.view()).unwrap();
        assert_eq!(dataset.target_mean(&[0, 1]).unwrap(), 2.0);

        let residual = array![-1.0, 1.0];
        let swapped = dataset.with_target(residual.view()).unwrap();
        assert_eq!(swapped.features(), x.view());
        assert_eq!(swapped.target_mean(&[0, 1]).unwrap(), 0.0);

        assert!(dataset.with_target(array![1.0].view()).is_err());
        assert!(dataset.with_target(array![1.0, f64::NAN].view()).is_err());
    }

    #[test]
    fn test_empty_mean_is_an_error() {
        let x = array![[1.0]];
        let y = array![1.0];
        let dataset = Dataset::new(x.view(), y.view()).unwrap();
        assert!(matches!(
            dataset.target_mean(&[]),
            Err(GbrtError::DegenerateData { .. })
        ));
    }

    #[test]
    fn test_constant_target_and_indices() {
        let x = array![[1.0], [2.0], [3.0]];
        let y = array![4.0, 4.0, 5.0];
        let dataset = Dataset::new(x.view(), y.view()).unwrap();

        assert!(dataset.is_target_constant(&[0, 1]));
        assert!(!dataset.is_target_constant(&[0, 1, 2]));
        assert!(dataset.check_indices(&[0, 2]).is_ok());
        assert!(matches!(
            dataset.check_indices(&[0, 3]),
            Err(GbrtError::IndexOutOfBounds { index: 3, length: 3 })
        ));
    }
}
