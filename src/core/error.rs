//! Error handling and error types for gbrt-rust.
//!
//! Every fallible operation in the crate returns [`Result<T>`]. Usage errors
//! (bad hyperparameters, mismatched shapes, predicting with an unfitted model)
//! are reported immediately and are never papered over with defaults.

use std::io;
use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum GbrtError {
    /// Configuration errors (unparseable or inconsistent settings)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },

    /// Data that admits no meaningful statistics (no rows, empty node)
    #[error("Degenerate data: {message}")]
    DegenerateData { message: String },

    /// Dimension mismatch errors
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// Out of bounds access
    #[error("Index out of bounds: index {index}, length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// NaN or infinite value where a finite number is required
    #[error("Non-finite value {value} in {context} at position {position}")]
    NonFiniteValue {
        context: String,
        position: usize,
        value: f64,
    },

    /// Model used before it was fitted
    #[error("Model not fitted: {model} must be fitted before {operation}")]
    NotFitted { model: String, operation: String },

    /// Tree construction errors
    #[error("Tree construction error: {message}")]
    TreeConstruction { message: String },

    /// Training-related errors
    #[error("Training error: {message}")]
    Training { message: String },

    /// Serialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// File I/O errors
    #[error("I/O error: {source}")]
    IO {
        #[from]
        source: io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

/// Type alias for Results using GbrtError
pub type Result<T> = std::result::Result<T, GbrtError>;

impl GbrtError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        GbrtError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        GbrtError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a degenerate data error
    pub fn degenerate_data<S: Into<String>>(message: S) -> Self {
        GbrtError::DegenerateData {
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch<E, A>(expected: E, actual: A) -> Self
    where
        E: Into<String>,
        A: Into<String>,
    {
        GbrtError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        GbrtError::IndexOutOfBounds { index, length }
    }

    /// Create a non-finite value error
    pub fn non_finite<S: Into<String>>(context: S, position: usize, value: f64) -> Self {
        GbrtError::NonFiniteValue {
            context: context.into(),
            position,
            value,
        }
    }

    /// Create a not-fitted error
    pub fn not_fitted<M, O>(model: M, operation: O) -> Self
    where
        M: Into<String>,
        O: Into<String>,
    {
        GbrtError::NotFitted {
            model: model.into(),
            operation: operation.into(),
        }
    }

    /// Create a tree construction error
    pub fn tree_construction<S: Into<String>>(message: S) -> Self {
        GbrtError::TreeConstruction {
            message: message.into(),
        }
    }

    /// Create a training error
    pub fn training<S: Into<String>>(message: S) -> Self {
        GbrtError::Training {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        GbrtError::Serialization {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by how the API was called rather than
    /// by the content of the data.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            GbrtError::Config { .. }
                | GbrtError::InvalidParameter { .. }
                | GbrtError::DimensionMismatch { .. }
                | GbrtError::IndexOutOfBounds { .. }
                | GbrtError::NonFiniteValue { .. }
                | GbrtError::NotFitted { .. }
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            GbrtError::Config { .. } => "config",
            GbrtError::InvalidParameter { .. } => "invalid_parameter",
            GbrtError::DegenerateData { .. } => "degenerate_data",
            GbrtError::DimensionMismatch { .. } => "dimension_mismatch",
            GbrtError::IndexOutOfBounds { .. } => "index_out_of_bounds",
            GbrtError::NonFiniteValue { .. } => "non_finite_value",
            GbrtError::NotFitted { .. } => "not_fitted",
            GbrtError::TreeConstruction { .. } => "tree_construction",
            GbrtError::Training { .. } => "training",
            GbrtError::Serialization { .. } => "serialization",
            GbrtError::IO { .. } => "io",
            GbrtError::Json { .. } => "json",
        }
    }
}

impl From<toml::de::Error> for GbrtError {
    fn from(err: toml::de::Error) -> Self {
        GbrtError::serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for GbrtError {
    fn from(err: toml::ser::Error) -> Self {
        GbrtError::serialization(err.to_string())
    }
}

/// Convenience macros for error creation
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::core::error::GbrtError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::GbrtError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}
