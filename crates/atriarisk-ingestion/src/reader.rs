//! CSV reader with heuristic encoding and delimiter detection.
//!
//! Uploads arrive from many hospital export tools: encodings vary
//! (UTF-8, Windows-1252, UTF-16 spreadsheet exports) and so do delimiters.
//! The encoding is sniffed from the first 10 KB; delimiters are tried in a
//! fixed order and the first parse producing more than one column wins.

use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;
use tracing::debug;

use atriarisk_common::{AtriaError, Result};

/// Bytes sampled for encoding detection.
const SNIFF_LEN: usize = 10_000;

/// Delimiter candidates, in trial order.
const DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// A parsed table before any interpretation: one header row of column
/// names plus string cell rows.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Read a delimited text file into a [`RawTable`].
///
/// Fails with [`AtriaError::UnreadableTable`] when no delimiter candidate
/// yields more than one column; callers must treat that as a hard failure
/// for the whole upload.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let bytes = fs::read(path)?;

    let mut detector = EncodingDetector::new();
    let sample_len = bytes.len().min(SNIFF_LEN);
    detector.feed(&bytes[..sample_len], bytes.len() <= SNIFF_LEN);
    let encoding = detector.guess(None, true);
    let (text, _, _) = encoding.decode(&bytes);
    debug!(encoding = encoding.name(), path = %path.display(), "decoded table");

    for delimiter in DELIMITERS {
        if let Some(table) = try_delimiter(&text, delimiter) {
            debug!(
                delimiter = %(delimiter as char),
                columns = table.headers.len(),
                rows = table.rows.len(),
                "delimiter accepted"
            );
            return Ok(table);
        }
    }

    Err(AtriaError::UnreadableTable(path.display().to_string()))
}

/// Parse with one delimiter; `None` when the parse fails or produces a
/// single column (structurally implausible for patient data).
fn try_delimiter(text: &str, delimiter: u8) -> Option<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .ok()?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.len() < 2 {
        return None;
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        // A ragged or malformed record means this delimiter does not match
        // the writer's layout; move on to the next candidate.
        let record = record.ok()?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Some(RawTable { headers, rows })
}
