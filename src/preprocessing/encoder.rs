//! Categorical label encoding

use crate::error::{PiperankError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label encoder mapping distinct string labels to consecutive integer
/// codes, assigned in first-seen order during a single pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelEncoder {
    // label -> code; codes are dense 0..n in first-seen order
    mapping: HashMap<String, i64>,
    // labels in code order, for reporting and inverse lookup
    labels: Vec<String>,
    is_fitted: bool,
}

impl LabelEncoder {
    /// Create a new unfitted encoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the label -> code mapping from a string series
    pub fn fit(&mut self, series: &Series) -> Result<&mut Self> {
        let ca = series
            .str()
            .map_err(|e| PiperankError::Data(e.to_string()))?;

        for val in ca.into_iter().flatten() {
            if !self.mapping.contains_key(val) {
                self.mapping.insert(val.to_string(), self.labels.len() as i64);
                self.labels.push(val.to_string());
            }
        }

        self.is_fitted = true;
        Ok(self)
    }

    /// Replace each label with its integer code
    pub fn transform(&self, series: &Series) -> Result<Series> {
        if !self.is_fitted {
            return Err(PiperankError::ModelNotFitted);
        }

        let ca = series
            .str()
            .map_err(|e| PiperankError::Data(e.to_string()))?;

        let values: Vec<i64> = ca
            .into_iter()
            .map(|v| {
                let label = v.ok_or_else(|| {
                    PiperankError::Data(format!("null label in column '{}'", series.name()))
                })?;
                self.mapping.get(label).copied().ok_or_else(|| {
                    PiperankError::Data(format!("unseen label '{label}' in column '{}'", series.name()))
                })
            })
            .collect::<Result<_>>()?;

        Ok(Series::new(series.name().clone(), values))
    }

    /// Fit and transform in one step
    pub fn fit_transform(&mut self, series: &Series) -> Result<Series> {
        self.fit(series)?;
        self.transform(series)
    }

    /// Code assigned to a label, if it was seen during fit
    pub fn lookup(&self, label: &str) -> Option<i64> {
        self.mapping.get(label).copied()
    }

    /// Labels in code order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Encode one designated categorical column in place.
///
/// Presence of the column is optional: when it is absent, or already numeric,
/// the dataset is returned unchanged and no encoder is built.
pub fn encode_categorical(
    df: &DataFrame,
    column: &str,
) -> Result<(DataFrame, Option<LabelEncoder>)> {
    let Ok(col) = df.column(column) else {
        return Ok((df.clone(), None));
    };
    let series = col.as_materialized_series();
    if !matches!(series.dtype(), DataType::String) {
        return Ok((df.clone(), None));
    }

    let mut encoder = LabelEncoder::new();
    let encoded = encoder.fit_transform(series)?;

    let result = df
        .clone()
        .with_column(encoded)
        .map_err(|e| PiperankError::Data(e.to_string()))?
        .clone();

    Ok((result, Some(encoder)))
}
