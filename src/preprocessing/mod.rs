//! Data preprocessing module
//!
//! Provides the two preparation steps the ranking workflow needs:
//! - Label encoding for a designated categorical column
//! - Feature / target split with the categorical column excluded

mod encoder;
mod split;

pub use encoder::{encode_categorical, LabelEncoder};
pub use split::{split_features_target, FeatureTable};
