//! Gradient boosting under squared-error loss.
//!
//! Each stage fits a weak learner to the current residuals (the negative
//! gradient of the squared error) and adds its shrunk predictions to the
//! running ensemble prediction.

pub mod gbdt;

pub use gbdt::GradientBoosting;
