//! Model training module
//!
//! A single model family is needed here: binary logistic regression fitted
//! by batch gradient descent.

mod logistic;

pub use logistic::LogisticRegression;
