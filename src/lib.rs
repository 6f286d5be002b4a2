//! piperank - Optimal configuration selection over tabular data
//!
//! This crate loads a delimited dataset of candidate pipeline
//! configurations, fits a binary logistic model, and reports the row with
//! the highest predicted positive-class probability:
//! - [`data`] - CSV loading with encoding fallback (UTF-8, GBK, UTF-16)
//! - [`preprocessing`] - Label encoding and feature/target split
//! - [`training`] - Binary logistic regression
//! - [`ranking`] - Workflow engine and stable argmax selection
//! - [`visualization`] - SVG scatter of the ranked rows
//! - [`export`] - Scored-CSV and JSON report output
//! - [`cli`] - Command-line interface

// Core error handling
pub mod error;

// Data ingestion and preparation
pub mod data;
pub mod preprocessing;

// Model fitting and selection
pub mod training;
pub mod ranking;

// Output
pub mod visualization;
pub mod export;

// Services
pub mod cli;

pub use error::{PiperankError, Result};

/// Re-export commonly used types
pub mod prelude {
    // Error handling
    pub use crate::error::{PiperankError, Result};

    // Data loading
    pub use crate::data::{CsvLoader, LoadedTable};

    // Preprocessing
    pub use crate::preprocessing::{
        encode_categorical, split_features_target, FeatureTable, LabelEncoder,
    };

    // Training
    pub use crate::training::LogisticRegression;

    // Ranking
    pub use crate::ranking::{select_optimal, RankConfig, RankEngine, RankReport, SelectionResult};

    // Visualization
    pub use crate::visualization::ScatterPlot;
}
