//! Dataset management: validated, borrowed views over training data.

pub mod dataset;

pub use dataset::{ensure_finite_matrix, Dataset};
