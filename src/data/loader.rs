//! CSV loading with encoding fallback
//!
//! Configuration exports from CAD tooling arrive in whatever encoding the
//! workstation locale produced. The loader tries a fixed candidate list
//! (UTF-8, then GBK, then UTF-16) and parses with the first encoding that
//! decodes cleanly. Parse errors after a clean decode are data errors, not
//! a reason to try the next encoding.

use crate::error::{PiperankError, Result};
use encoding_rs::{Encoding, GBK, UTF_16BE, UTF_16LE, UTF_8};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Candidate encodings, in priority order.
const CANDIDATES: [&str; 3] = ["utf-8", "gbk", "utf-16"];

/// A parsed table together with the encoding that produced it.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub df: DataFrame,
    /// Name of the candidate encoding that decoded the file.
    pub encoding: &'static str,
}

/// Loader for delimited text files of unknown encoding
pub struct CsvLoader {
    delimiter: u8,
    infer_schema_length: Option<usize>,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvLoader {
    /// Create a new loader with comma delimiter
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            infer_schema_length: Some(100),
        }
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set how many rows to sample for schema inference
    pub fn with_infer_schema_length(mut self, n: usize) -> Self {
        self.infer_schema_length = Some(n);
        self
    }

    /// Load a delimited file, trying each candidate encoding in order.
    ///
    /// The header row is required. Fails with `UnreadableFile` when the path
    /// cannot be opened and `UnsupportedEncoding` when no candidate decodes.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadedTable> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| PiperankError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })?;

        let (text, encoding) = decode_candidates(&bytes).ok_or_else(|| {
            PiperankError::UnsupportedEncoding {
                path: path.to_path_buf(),
                tried: CANDIDATES.join(", "),
            }
        })?;
        debug!(path = %path.display(), encoding, "decoded input file");

        let df = self.parse(text.into_bytes())?;
        Ok(LoadedTable { df, encoding })
    }

    fn parse(&self, utf8_bytes: Vec<u8>) -> Result<DataFrame> {
        let parse_opts = CsvParseOptions::default().with_separator(self.delimiter);

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(self.infer_schema_length)
            .with_parse_options(parse_opts)
            .into_reader_with_file_handle(Cursor::new(utf8_bytes))
            .finish()?;

        Ok(df)
    }
}

/// Try each candidate encoding; return the decoded text and the winner's name.
///
/// Decoding is strict: any malformed sequence rejects the candidate. A BOM
/// belonging to the winning candidate is stripped.
fn decode_candidates(bytes: &[u8]) -> Option<(String, &'static str)> {
    if let Some(text) = decode_strict(UTF_8, strip_bom(bytes, &[0xEF, 0xBB, 0xBF])) {
        return Some((text, "utf-8"));
    }
    if let Some(text) = decode_strict(GBK, bytes) {
        return Some((text, "gbk"));
    }
    // UTF-16: endianness from BOM, little-endian when absent.
    let (encoding, body): (&'static Encoding, &[u8]) = if bytes.starts_with(&[0xFF, 0xFE]) {
        (UTF_16LE, &bytes[2..])
    } else if bytes.starts_with(&[0xFE, 0xFF]) {
        (UTF_16BE, &bytes[2..])
    } else {
        (UTF_16LE, bytes)
    };
    if let Some(text) = decode_strict(encoding, body) {
        return Some((text, "utf-16"));
    }
    None
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|cow| cow.into_owned())
}

fn strip_bom<'a>(bytes: &'a [u8], bom: &[u8]) -> &'a [u8] {
    bytes.strip_prefix(bom).unwrap_or(bytes)
}
