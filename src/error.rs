//! Error types for the piperank crate

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for piperank operations
pub type Result<T> = std::result::Result<T, PiperankError>;

/// Main error type for the piperank crate
#[derive(Error, Debug)]
pub enum PiperankError {
    #[error("cannot read {}: {source}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no supported text encoding for {} (tried {tried})", .path.display())]
    UnsupportedEncoding { path: PathBuf, tried: String },

    #[error("dataset needs at least 2 columns, found {found}")]
    InsufficientColumns { found: usize },

    #[error("no feature columns remain after excluding the categorical column")]
    NoFeatureColumns,

    #[error("optimizer diverged after {iterations} iterations")]
    Convergence { iterations: usize },

    #[error("target column has {n_classes} distinct classes, binary fit needs exactly 2")]
    ClassImbalance { n_classes: usize },

    #[error("empty input: feature matrix has no rows")]
    EmptyInput,

    #[error("Data error: {0}")]
    Data(String),

    #[error("Invalid shape: expected {expected}, got {actual}")]
    Shape { expected: String, actual: String },

    #[error("Model not fitted")]
    ModelNotFitted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<polars::error::PolarsError> for PiperankError {
    fn from(err: polars::error::PolarsError) -> Self {
        PiperankError::Data(err.to_string())
    }
}

impl From<serde_json::Error> for PiperankError {
    fn from(err: serde_json::Error) -> Self {
        PiperankError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PiperankError::InsufficientColumns { found: 1 };
        assert_eq!(err.to_string(), "dataset needs at least 2 columns, found 1");
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::error::PolarsError::NoData("empty".into());
        let err: PiperankError = polars_err.into();
        assert!(matches!(err, PiperankError::Data(_)));
    }
}
