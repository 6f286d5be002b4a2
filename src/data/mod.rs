//! Data ingestion module
//!
//! Loads delimited text files whose character encoding is not known in
//! advance and parses them into DataFrames.

mod loader;

pub use loader::{CsvLoader, LoadedTable};
