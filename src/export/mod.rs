//! Result export
//!
//! Writes ranking outcomes to flat files for downstream automation: the
//! scored dataset as CSV and the selection report as JSON.

use crate::error::{PiperankError, Result};
use crate::ranking::RankReport;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Write the input rows with an appended `probability` column.
///
/// Row order and count are preserved from the source dataset.
pub fn write_scores_csv(
    df: &DataFrame,
    probabilities: &[f64],
    path: impl AsRef<Path>,
) -> Result<()> {
    if df.height() != probabilities.len() {
        return Err(PiperankError::Shape {
            expected: format!("{} probabilities", df.height()),
            actual: format!("{} probabilities", probabilities.len()),
        });
    }

    let mut scored = df
        .clone()
        .with_column(Series::new("probability".into(), probabilities))
        .map_err(|e| PiperankError::Data(e.to_string()))?
        .clone();

    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .finish(&mut scored)
        .map_err(|e| PiperankError::Data(e.to_string()))?;
    Ok(())
}

/// Write the selection report as pretty-printed JSON
pub fn write_json_report(report: &RankReport, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}
