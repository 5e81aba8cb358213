//! Regression metrics for model evaluation.

use crate::core::error::{GbrtError, Result};
use crate::core::types::{Label, Score};
use ndarray::ArrayView1;

fn validate_inputs(predictions: &ArrayView1<'_, Score>, targets: &ArrayView1<'_, Label>) -> Result<()> {
    if predictions.len() != targets.len() {
        return Err(GbrtError::dimension_mismatch(
            format!("{} predictions", targets.len()),
            format!("{} predictions", predictions.len()),
        ));
    }
    if targets.is_empty() {
        return Err(GbrtError::degenerate_data("cannot evaluate a metric on zero samples"));
    }
    Ok(())
}

fn sum_squared_error(predictions: &ArrayView1<'_, Score>, targets: &ArrayView1<'_, Label>) -> f64 {
    predictions
        .iter()
        .zip(targets.iter())
        .map(|(p, t)| (t - p).powi(2))
        .sum()
}

/// Mean squared error between `predictions` and `targets`.
pub fn mean_squared_error(
    predictions: ArrayView1<'_, Score>,
    targets: ArrayView1<'_, Label>,
) -> Result<f64> {
    validate_inputs(&predictions, &targets)?;
    Ok(sum_squared_error(&predictions, &targets) / targets.len() as f64)
}

/// Square root of [`mean_squared_error`].
pub fn root_mean_squared_error(
    predictions: ArrayView1<'_, Score>,
    targets: ArrayView1<'_, Label>,
) -> Result<f64> {
    mean_squared_error(predictions, targets).map(f64::sqrt)
}

/// Coefficient of determination.
///
/// For a constant target the score is 1.0 on a perfect fit and 0.0 otherwise.
pub fn r2_score(predictions: ArrayView1<'_, Score>, targets: ArrayView1<'_, Label>) -> Result<f64> {
    validate_inputs(&predictions, &targets)?;

    let mean = targets.sum() / targets.len() as f64;
    let total: f64 = targets.iter().map(|t| (t - mean).powi(2)).sum();
    let residual = sum_squared_error(&predictions, &targets);

    if total == 0.0 {
        return Ok(if residual == 0.0 { 1.0 } else { 0.0 });
    }
    Ok(1.0 - residual / total)
}
