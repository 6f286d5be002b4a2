//! Binary logistic regression

use crate::error::{PiperankError, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Logistic regression for binary classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// Fitted coefficients
    pub coefficients: Option<Array1<f64>>,
    /// Fitted intercept
    pub intercept: Option<f64>,
    /// Whether to fit intercept
    pub fit_intercept: bool,
    /// Regularization strength (L2)
    pub alpha: f64,
    /// Maximum iterations
    pub max_iter: usize,
    /// Convergence tolerance
    pub tol: f64,
    /// Learning rate
    pub learning_rate: f64,
    /// The two observed class values, ordered; the greater is the positive class
    pub classes: Option<(f64, f64)>,
    /// Whether model is fitted
    pub is_fitted: bool,
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LogisticRegression {
    /// Create a new logistic regression model
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            fit_intercept: true,
            alpha: 0.01,
            max_iter: 1000,
            tol: 1e-6,
            learning_rate: 0.1,
            classes: None,
            is_fitted: false,
        }
    }

    /// Set regularization strength
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set maximum iterations
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set learning rate
    pub fn with_learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Sigmoid function
    fn sigmoid(z: &Array1<f64>) -> Array1<f64> {
        z.mapv(|v| 1.0 / (1.0 + (-v).exp()))
    }

    /// Fit the model using gradient descent.
    ///
    /// The target must contain exactly two distinct values; they are mapped
    /// to 0/1 with the greater value as the positive class. Divergence of
    /// the optimizer (non-finite gradients) is an error; running out of
    /// iterations before reaching tolerance only logs a warning.
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<&mut Self> {
        let n_samples = x.nrows();
        let n_features = x.ncols();

        if n_samples == 0 {
            return Err(PiperankError::EmptyInput);
        }
        if n_samples != y.len() {
            return Err(PiperankError::Shape {
                expected: format!("y length = {}", n_samples),
                actual: format!("y length = {}", y.len()),
            });
        }

        let (negative, positive) = distinct_classes(y)?;
        let y01 = y.mapv(|v| if v == positive { 1.0 } else { 0.0 });

        // Initialize weights
        let mut weights = Array1::zeros(n_features);
        let mut bias = 0.0;

        let lr = self.learning_rate;
        let alpha = self.alpha;
        let mut converged = false;

        // Gradient descent
        for iter in 0..self.max_iter {
            // Forward pass
            let linear = x.dot(&weights) + bias;
            let predictions = Self::sigmoid(&linear);

            // Compute gradients
            let errors = &predictions - &y01;
            let dw = (x.t().dot(&errors) / n_samples as f64) + (alpha * &weights);
            let db = errors.mean().unwrap_or(0.0);

            let grad_norm = (dw.mapv(|v| v * v).sum() + db * db).sqrt();
            if !grad_norm.is_finite() {
                return Err(PiperankError::Convergence { iterations: iter });
            }
            if grad_norm < self.tol {
                converged = true;
                break;
            }

            // Update weights
            weights = weights - lr * dw;
            bias = bias - lr * db;
        }

        if !weights.iter().all(|w| w.is_finite()) || !bias.is_finite() {
            return Err(PiperankError::Convergence {
                iterations: self.max_iter,
            });
        }
        if !converged {
            warn!(
                max_iter = self.max_iter,
                "gradient descent stopped before reaching tolerance"
            );
        }

        self.coefficients = Some(weights);
        self.intercept = Some(bias);
        self.classes = Some((negative, positive));
        self.is_fitted = true;

        Ok(self)
    }

    /// Positive-class probability for each row
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let coefficients = self
            .coefficients
            .as_ref()
            .ok_or(PiperankError::ModelNotFitted)?;
        let intercept = self.intercept.unwrap_or(0.0);

        if x.ncols() != coefficients.len() {
            return Err(PiperankError::Shape {
                expected: format!("{} feature columns", coefficients.len()),
                actual: format!("{} feature columns", x.ncols()),
            });
        }

        let linear = x.dot(coefficients) + intercept;
        Ok(Self::sigmoid(&linear))
    }

    /// Predict class labels (0.5 threshold, in the original class values)
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let (negative, positive) = self.classes.ok_or(PiperankError::ModelNotFitted)?;
        let proba = self.predict_proba(x)?;
        Ok(proba.mapv(|p| if p >= 0.5 { positive } else { negative }))
    }

    /// Get accuracy score
    pub fn score(&self, x: &Array2<f64>, y: &Array1<f64>) -> Result<f64> {
        let y_pred = self.predict(x)?;

        let correct = y_pred
            .iter()
            .zip(y.iter())
            .filter(|(pred, actual)| (*pred - *actual).abs() < f64::EPSILON)
            .count();

        Ok(correct as f64 / y.len() as f64)
    }
}

/// The two distinct values of a binary target, ordered ascending.
fn distinct_classes(y: &Array1<f64>) -> Result<(f64, f64)> {
    let mut distinct: Vec<f64> = Vec::with_capacity(2);
    for &v in y.iter() {
        if !distinct.iter().any(|&d| d == v) {
            distinct.push(v);
        }
    }
    if distinct.len() != 2 {
        return Err(PiperankError::ClassImbalance {
            n_classes: distinct.len(),
        });
    }
    distinct.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Ok((distinct[0], distinct[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn separable_data() -> (Array2<f64>, Array1<f64>) {
        let x = array![[0.0], [0.5], [1.0], [4.0], [4.5], [5.0]];
        let y = array![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
        (x, y)
    }

    #[test]
    fn test_fit_separable() {
        let (x, y) = separable_data();
        let mut model = LogisticRegression::new().with_max_iter(500);
        model.fit(&x, &y).unwrap();

        assert!(model.is_fitted);
        let proba = model.predict_proba(&x).unwrap();
        assert!(proba[0] < 0.5, "low feature value should score below 0.5");
        assert!(proba[5] > 0.5, "high feature value should score above 0.5");
        assert!(model.score(&x, &y).unwrap() >= 5.0 / 6.0);
    }

    #[test]
    fn test_single_class_fails() {
        let x = array![[1.0], [2.0], [3.0]];
        let y = array![1.0, 1.0, 1.0];
        let mut model = LogisticRegression::new();

        let err = model.fit(&x, &y).unwrap_err();
        assert!(matches!(err, PiperankError::ClassImbalance { n_classes: 1 }));
    }

    #[test]
    fn test_three_classes_fail() {
        let x = array![[1.0], [2.0], [3.0]];
        let y = array![0.0, 1.0, 2.0];
        let mut model = LogisticRegression::new();

        let err = model.fit(&x, &y).unwrap_err();
        assert!(matches!(err, PiperankError::ClassImbalance { n_classes: 3 }));
    }

    #[test]
    fn test_empty_input_fails() {
        let x = Array2::<f64>::zeros((0, 2));
        let y = Array1::<f64>::zeros(0);
        let mut model = LogisticRegression::new();

        let err = model.fit(&x, &y).unwrap_err();
        assert!(matches!(err, PiperankError::EmptyInput));
    }

    #[test]
    fn test_shape_mismatch_fails() {
        let x = array![[1.0], [2.0]];
        let y = array![0.0, 1.0, 1.0];
        let mut model = LogisticRegression::new();

        let err = model.fit(&x, &y).unwrap_err();
        assert!(matches!(err, PiperankError::Shape { .. }));
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let model = LogisticRegression::new();
        let err = model.predict_proba(&array![[1.0]]).unwrap_err();
        assert!(matches!(err, PiperankError::ModelNotFitted));
    }

    #[test]
    fn test_nonstandard_class_values_mapped() {
        // Classes 2/5 instead of 0/1; 5 is the positive class.
        let x = array![[0.0], [0.5], [4.5], [5.0]];
        let y = array![2.0, 2.0, 5.0, 5.0];
        let mut model = LogisticRegression::new().with_max_iter(500);
        model.fit(&x, &y).unwrap();

        assert_eq!(model.classes, Some((2.0, 5.0)));
        let pred = model.predict(&x).unwrap();
        assert!(pred.iter().all(|&p| p == 2.0 || p == 5.0));
    }
}
