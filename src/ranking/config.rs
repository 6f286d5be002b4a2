//! Ranking configuration

use serde::{Deserialize, Serialize};

/// Configuration for the ranking workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankConfig {
    /// Name of the categorical column, if the dataset has one.
    /// The column is label-encoded and excluded from the feature set.
    pub categorical_column: Option<String>,

    /// Maximum optimizer iterations
    pub max_iter: usize,

    /// Optimizer learning rate
    pub learning_rate: f64,

    /// L2 regularization strength
    pub alpha: f64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            categorical_column: None,
            max_iter: 1000,
            learning_rate: 0.1,
            alpha: 0.01,
        }
    }
}

impl RankConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to name the categorical column
    pub fn with_categorical_column(mut self, column: impl Into<String>) -> Self {
        self.categorical_column = Some(column.into());
        self
    }

    /// Builder method to set maximum optimizer iterations
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Builder method to set the optimizer learning rate
    pub fn with_learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Builder method to set the L2 regularization strength
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}
