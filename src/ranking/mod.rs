//! Configuration ranking
//!
//! The linear workflow tying the crate together: encode the categorical
//! column, split features from target, fit the logistic model, and select
//! the row with the highest positive-class probability.

mod config;
mod engine;

pub use config::RankConfig;
pub use engine::{RankEngine, RankReport};

use crate::error::{PiperankError, Result};
use crate::training::LogisticRegression;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Index and probability of the best-scoring row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// 0-based row index into the feature matrix
    pub index: usize,
    /// Positive-class probability of that row
    pub probability: f64,
}

/// Score every row and return the stable argmax.
///
/// Ties resolve to the lowest index. Fails with `EmptyInput` when the
/// feature matrix has no rows.
pub fn select_optimal(
    model: &LogisticRegression,
    features: &Array2<f64>,
) -> Result<SelectionResult> {
    if features.nrows() == 0 {
        return Err(PiperankError::EmptyInput);
    }

    let probabilities = model.predict_proba(features)?;

    let mut best = SelectionResult {
        index: 0,
        probability: probabilities[0],
    };
    for (index, &probability) in probabilities.iter().enumerate().skip(1) {
        if probability > best.probability {
            best = SelectionResult { index, probability };
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    /// A hand-built model: w = [1], b = 0, classes 0/1.
    fn unit_model() -> LogisticRegression {
        LogisticRegression {
            coefficients: Some(array![1.0]),
            intercept: Some(0.0),
            classes: Some((0.0, 1.0)),
            is_fitted: true,
            ..LogisticRegression::new()
        }
    }

    #[test]
    fn test_selects_maximum_probability_row() {
        let model = unit_model();
        let features = array![[0.0], [3.0], [1.0]];

        let result = select_optimal(&model, &features).unwrap();
        assert_eq!(result.index, 1);
        assert!(result.probability > 0.9);
    }

    #[test]
    fn test_no_row_scores_strictly_higher() {
        let model = unit_model();
        let features = array![[0.2], [0.9], [0.4], [0.9]];

        let result = select_optimal(&model, &features).unwrap();
        let probabilities = model.predict_proba(&features).unwrap();
        assert!(probabilities.iter().all(|&p| p <= result.probability));
    }

    #[test]
    fn test_ties_resolve_to_lowest_index() {
        // Zero weights make every row score exactly 0.5.
        let model = LogisticRegression {
            coefficients: Some(array![0.0]),
            intercept: Some(0.0),
            classes: Some((0.0, 1.0)),
            is_fitted: true,
            ..LogisticRegression::new()
        };
        let features = array![[5.0], [1.0], [9.0]];

        let result = select_optimal(&model, &features).unwrap();
        assert_eq!(result.index, 0);
        assert_eq!(result.probability, 0.5);
    }

    #[test]
    fn test_empty_features_fail() {
        let model = unit_model();
        let features = Array2::<f64>::zeros((0, 1));

        let err = select_optimal(&model, &features).unwrap_err();
        assert!(matches!(err, PiperankError::EmptyInput));
    }
}
