//! Core data types for gbrt-rust.
//!
//! All numeric work is done in 64-bit floats: the split score subtracts large,
//! nearly equal sums and loses too much in single precision.

/// Feature value type.
pub type FeatureValue = f64;

/// Target value type.
pub type Label = f64;

/// Prediction type.
pub type Score = f64;

/// Feature (column) index.
pub type FeatureIndex = usize;

/// Row index into a dataset.
pub type DataIndex = usize;
