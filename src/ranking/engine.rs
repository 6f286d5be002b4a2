//! Ranking engine implementation

use crate::error::Result;
use crate::preprocessing::{encode_categorical, split_features_target, LabelEncoder};
use crate::training::LogisticRegression;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;

use super::{select_optimal, RankConfig, SelectionResult};

/// Outcome of one ranking run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankReport {
    pub selection: SelectionResult,
    pub feature_names: Vec<String>,
    pub target_name: String,
    /// Feature values of the selected row, parallel to `feature_names`
    pub selected_row: Vec<f64>,
    /// Positive-class probability of every row, in source order
    pub probabilities: Vec<f64>,
    pub train_accuracy: f64,
    pub n_rows: usize,
    pub n_features: usize,
    pub training_time_secs: f64,
}

/// Drives the ranking workflow: encode, split, fit, select
#[derive(Debug, Clone, Default)]
pub struct RankEngine {
    config: RankConfig,
    encoder: Option<LabelEncoder>,
    model: Option<LogisticRegression>,
}

impl RankEngine {
    /// Create a new engine
    pub fn new(config: RankConfig) -> Self {
        Self {
            config,
            encoder: None,
            model: None,
        }
    }

    /// Run the workflow over a loaded dataset
    pub fn run(&mut self, df: &DataFrame) -> Result<RankReport> {
        let start = Instant::now();

        let (df, encoder) = match self.config.categorical_column.as_deref() {
            Some(column) => encode_categorical(df, column)?,
            None => (df.clone(), None),
        };
        self.encoder = encoder;

        let table = split_features_target(&df, self.config.categorical_column.as_deref())?;
        info!(
            rows = table.features.nrows(),
            features = table.features.ncols(),
            target_column = %table.target_name,
            "dataset split"
        );

        let mut model = LogisticRegression::new()
            .with_max_iter(self.config.max_iter)
            .with_learning_rate(self.config.learning_rate)
            .with_alpha(self.config.alpha);
        model.fit(&table.features, &table.target)?;

        let train_accuracy = model.score(&table.features, &table.target)?;
        let selection = select_optimal(&model, &table.features)?;
        let probabilities = model.predict_proba(&table.features)?.to_vec();
        info!(
            index = selection.index,
            probability = selection.probability,
            "optimal configuration selected"
        );

        let report = RankReport {
            selection,
            selected_row: table.features.row(selection.index).to_vec(),
            feature_names: table.feature_names,
            target_name: table.target_name,
            probabilities,
            train_accuracy,
            n_rows: table.features.nrows(),
            n_features: table.features.ncols(),
            training_time_secs: start.elapsed().as_secs_f64(),
        };

        self.model = Some(model);
        Ok(report)
    }

    /// The fitted model from the last run
    pub fn model(&self) -> Option<&LogisticRegression> {
        self.model.as_ref()
    }

    /// The label encoder built during the last run, if a categorical
    /// column was present
    pub fn encoder(&self) -> Option<&LabelEncoder> {
        self.encoder.as_ref()
    }
}
