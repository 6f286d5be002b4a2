//! Integration test: ranking workflow end-to-end

use piperank::data::CsvLoader;
use piperank::error::PiperankError;
use piperank::preprocessing::{encode_categorical, split_features_target};
use piperank::ranking::{RankConfig, RankEngine};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_csv(bytes: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

/// Ten rows, three numeric columns, no categorical column present.
fn pipeline_data_csv() -> NamedTempFile {
    write_csv(
        b"pressure,flow,passed\n\
          1.0,0.5,0\n\
          1.2,0.6,0\n\
          1.4,0.7,0\n\
          1.6,0.8,0\n\
          1.8,0.9,0\n\
          4.0,2.0,1\n\
          4.2,2.1,1\n\
          4.4,2.2,1\n\
          4.6,2.3,1\n\
          5.0,2.5,1\n",
    )
}

#[test]
fn test_no_categorical_column_passes_through() {
    let file = pipeline_data_csv();
    let loaded = CsvLoader::new().load(file.path()).unwrap();

    let (encoded, encoder) = encode_categorical(&loaded.df, "组合方式").unwrap();
    assert!(encoder.is_none());
    assert!(encoded.equals(&loaded.df));

    let table = split_features_target(&encoded, Some("组合方式")).unwrap();
    assert_eq!(table.feature_names, vec!["pressure", "flow"]);
    assert_eq!(table.target_name, "passed");
    assert_eq!(table.features.nrows(), 10);
    assert_eq!(table.target.len(), 10);
}

#[test]
fn test_rank_end_to_end() {
    let file = pipeline_data_csv();
    let loaded = CsvLoader::new().load(file.path()).unwrap();

    let mut engine = RankEngine::new(RankConfig::default());
    let report = engine.run(&loaded.df).unwrap();

    assert_eq!(report.n_rows, 10);
    assert_eq!(report.probabilities.len(), 10);
    // The largest-feature row scores highest.
    assert_eq!(report.selection.index, 9);
    assert!(report.selection.probability > 0.5);
    // No other row scores strictly higher than the selected one.
    assert!(report
        .probabilities
        .iter()
        .all(|&p| p <= report.selection.probability));
}

#[test]
fn test_gbk_file_ranks_end_to_end() {
    let text = "组合方式,载荷,合格\n\
                焊接,0.5,0\n\
                法兰,0.8,0\n\
                焊接,1.1,0\n\
                法兰,4.0,1\n\
                焊接,4.5,1\n\
                法兰,5.0,1\n";
    let (encoded, _, had_errors) = encoding_rs::GBK.encode(text);
    assert!(!had_errors);
    let file = write_csv(&encoded);

    let loaded = CsvLoader::new().load(file.path()).unwrap();
    assert_eq!(loaded.encoding, "gbk");

    let config = RankConfig::new().with_categorical_column("组合方式");
    let mut engine = RankEngine::new(config);
    let report = engine.run(&loaded.df).unwrap();

    assert_eq!(report.feature_names, vec!["载荷"]);
    assert_eq!(report.selection.index, 5);
}

#[test]
fn test_single_data_column_fails() {
    let file = write_csv(b"only\n1.0\n2.0\n");
    let loaded = CsvLoader::new().load(file.path()).unwrap();

    let mut engine = RankEngine::new(RankConfig::default());
    let err = engine.run(&loaded.df).unwrap_err();
    assert!(matches!(
        err,
        PiperankError::InsufficientColumns { found: 1 }
    ));
}

#[test]
fn test_single_class_target_fails() {
    let file = write_csv(b"a,b\n1.0,1\n2.0,1\n3.0,1\n");
    let loaded = CsvLoader::new().load(file.path()).unwrap();

    let mut engine = RankEngine::new(RankConfig::default());
    let err = engine.run(&loaded.df).unwrap_err();
    assert!(matches!(err, PiperankError::ClassImbalance { n_classes: 1 }));
}

#[test]
fn test_header_only_file_fails_with_empty_input() {
    let file = write_csv(b"a,b,c\n");
    let loaded = CsvLoader::new().load(file.path()).unwrap();
    assert_eq!(loaded.df.height(), 0);

    let mut engine = RankEngine::new(RankConfig::default());
    let err = engine.run(&loaded.df).unwrap_err();
    assert!(matches!(err, PiperankError::EmptyInput));
}
