//! Feature / target split

use crate::error::{PiperankError, Result};
use ndarray::{Array1, Array2};
use polars::prelude::*;
use tracing::warn;

/// Numeric feature matrix and target vector extracted from a DataFrame.
///
/// Row i of `features` corresponds to row i of `target`; both preserve the
/// source row order.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    pub features: Array2<f64>,
    pub target: Array1<f64>,
    pub feature_names: Vec<String>,
    pub target_name: String,
}

/// Split a dataset into features and target.
///
/// The designated categorical column (when named and present) is excluded.
/// Of the remaining columns, all but the last form the feature matrix and
/// the last becomes the target. When exactly one column remains it serves
/// as both sole feature and target; this degenerate case is permitted but
/// logged.
pub fn split_features_target(
    df: &DataFrame,
    categorical_column: Option<&str>,
) -> Result<FeatureTable> {
    if df.width() < 2 {
        return Err(PiperankError::InsufficientColumns { found: df.width() });
    }

    let candidates: Vec<String> = df
        .get_column_names()
        .into_iter()
        .filter(|name| Some(name.as_str()) != categorical_column)
        .map(|s| s.to_string())
        .collect();

    if candidates.is_empty() {
        return Err(PiperankError::NoFeatureColumns);
    }

    let (feature_names, target_name) = if candidates.len() == 1 {
        warn!(
            column = %candidates[0],
            "single column remains after exclusion; using it as both feature and target"
        );
        (vec![candidates[0].clone()], candidates[0].clone())
    } else {
        let (features, target) = candidates.split_at(candidates.len() - 1);
        (features.to_vec(), target[0].clone())
    };

    let features = columns_to_array2(df, &feature_names)?;
    let target = column_to_array1(df, &target_name)?;

    Ok(FeatureTable {
        features,
        target,
        feature_names,
        target_name,
    })
}

fn columns_to_array2(df: &DataFrame, columns: &[String]) -> Result<Array2<f64>> {
    let mut out = Array2::zeros((df.height(), columns.len()));
    for (j, name) in columns.iter().enumerate() {
        let values = numeric_column(df, name)?;
        for (i, v) in values.into_iter().enumerate() {
            out[[i, j]] = v;
        }
    }
    Ok(out)
}

fn column_to_array1(df: &DataFrame, name: &str) -> Result<Array1<f64>> {
    Ok(Array1::from_vec(numeric_column(df, name)?))
}

fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let casted = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Float64)
        .map_err(|e| PiperankError::Data(e.to_string()))?;

    casted
        .f64()
        .map_err(|e| PiperankError::Data(e.to_string()))?
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            v.ok_or_else(|| {
                PiperankError::Data(format!("column '{name}' row {i}: missing or non-numeric value"))
            })
        })
        .collect()
}
