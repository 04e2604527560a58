//! Table normalisation: reconcile a raw table against a model's required
//! feature list, in either patient orientation.
//!
//! The output invariant is what the scorers rely on: every patient vector
//! has exactly the required features, in catalog order, with absent or
//! unparseable cells collapsed to zero.

use tracing::warn;

use atriarisk_common::{AtriaError, Result};

use crate::reader::RawTable;

/// How patients are laid out in the table. Supplied by the caller, never
/// detected from data (apart from the weak first-cell check in `Columns`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// One patient per row; the header row names the features.
    Rows,
    /// One patient per column; the first column names the features.
    Columns,
}

impl Orientation {
    /// Parse the form value; anything other than `columns` means `Rows`.
    pub fn from_form(value: &str) -> Orientation {
        if value.eq_ignore_ascii_case("columns") {
            Orientation::Columns
        } else {
            Orientation::Rows
        }
    }
}

/// One patient's zero-filled feature values, aligned with the required
/// feature catalog passed to [`normalise`].
#[derive(Debug, Clone)]
pub struct PatientVector {
    /// 1-based position of the patient in the source table.
    pub patient: usize,
    pub values: Vec<f64>,
}

/// Extract one feature vector per patient from `table`.
pub fn normalise(
    table: &RawTable,
    orientation: Orientation,
    required: &[&str],
) -> Result<Vec<PatientVector>> {
    match orientation {
        Orientation::Rows => Ok(normalise_rows(table, required)),
        Orientation::Columns => normalise_columns(table, required),
    }
}

fn parse_cell(cell: &str) -> f64 {
    cell.trim().parse::<f64>().unwrap_or(0.0)
}

/// Rows orientation: missing required features become all-zero columns,
/// extra columns are ignored.
fn normalise_rows(table: &RawTable, required: &[&str]) -> Vec<PatientVector> {
    let positions: Vec<Option<usize>> = required
        .iter()
        .map(|name| table.headers.iter().position(|h| h == name))
        .collect();

    table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let values = positions
                .iter()
                .map(|pos| {
                    pos.and_then(|c| row.get(c))
                        .map(|cell| parse_cell(cell))
                        .unwrap_or(0.0)
                })
                .collect();
            PatientVector { patient: i + 1, values }
        })
        .collect()
}

/// Columns orientation: the first column names the features, every later
/// column is one patient. Missing required features are appended as zero
/// rows; values are aligned to the catalog order by name, so both
/// orientations of the same data score identically.
fn normalise_columns(table: &RawTable, required: &[&str]) -> Result<Vec<PatientVector>> {
    // Weak orientation check: feature-name tables never start with a number.
    if let Some(first) = table.rows.first().and_then(|r| r.first()) {
        if first.trim().parse::<f64>().is_ok() {
            return Err(AtriaError::BadOrientation);
        }
    }

    let patients = table.headers.len().saturating_sub(1);
    let zeros = vec!["0".to_string(); patients];

    // The alphabetically-first required feature doubles as the blank-column
    // probe: an empty cell there marks a spreadsheet column with no data.
    let probe = {
        let mut names = required.to_vec();
        names.sort_unstable();
        names[0]
    };
    let probe_row = feature_row(table, &zeros, probe);

    let mut out = Vec::with_capacity(patients);
    for j in 0..patients {
        let blank = probe_row.get(j).map(|c| c.trim().is_empty()).unwrap_or(true);
        if blank {
            warn!(column = j + 1, "patient column has no data, skipping");
            continue;
        }
        let values = required
            .iter()
            .map(|name| {
                feature_row(table, &zeros, name)
                    .get(j)
                    .map(|c| parse_cell(c))
                    .unwrap_or(0.0)
            })
            .collect();
        out.push(PatientVector { patient: j + 1, values });
    }
    Ok(out)
}

/// Patient cells of the named feature row, or a zero row when the feature
/// is absent from the table.
fn feature_row<'a>(table: &'a RawTable, zeros: &'a [String], name: &str) -> &'a [String] {
    table
        .rows
        .iter()
        .find(|r| r.first().map(String::as_str) == Some(name))
        .map(|r| r.get(1..).unwrap_or(&[]))
        .unwrap_or(zeros)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    const REQUIRED: [&str; 3] = ["GLYC", "Urea", "Arginine"];

    #[test]
    fn test_rows_basic_extraction() {
        let t = table(&["GLYC", "Urea", "Arginine"], &[&["10", "5", "1.5"]]);
        let v = normalise(&t, Orientation::Rows, &REQUIRED).unwrap();
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].patient, 1);
        assert_eq!(v[0].values, vec![10.0, 5.0, 1.5]);
    }

    #[test]
    fn test_rows_missing_column_synthesised_as_zero() {
        let t = table(&["GLYC", "Urea"], &[&["10", "5"], &["12", "6"]]);
        let v = normalise(&t, Orientation::Rows, &REQUIRED).unwrap();
        assert_eq!(v[0].values, vec![10.0, 5.0, 0.0]);
        assert_eq!(v[1].values, vec![12.0, 6.0, 0.0]);
    }

    #[test]
    fn test_rows_extra_columns_dropped_and_order_fixed() {
        // Header order differs from the catalog; alignment is by name.
        let t = table(
            &["Urea", "ignored", "GLYC", "Arginine"],
            &[&["5", "999", "10", "1.5"]],
        );
        let v = normalise(&t, Orientation::Rows, &REQUIRED).unwrap();
        assert_eq!(v[0].values, vec![10.0, 5.0, 1.5]);
    }

    #[test]
    fn test_rows_blank_cells_become_zero() {
        let t = table(&["GLYC", "Urea", "Arginine"], &[&["", "n/a", "2"]]);
        let v = normalise(&t, Orientation::Rows, &REQUIRED).unwrap();
        assert_eq!(v[0].values, vec![0.0, 0.0, 2.0]);
    }

    #[test]
    fn test_columns_round_trip_matches_rows() {
        let by_rows = table(
            &["GLYC", "Urea", "Arginine"],
            &[&["10", "5", "1.5"], &["12", "6", "2.5"]],
        );
        let by_columns = table(
            &["Feature", "P1", "P2"],
            &[
                &["GLYC", "10", "12"],
                &["Urea", "5", "6"],
                &["Arginine", "1.5", "2.5"],
            ],
        );
        let a = normalise(&by_rows, Orientation::Rows, &REQUIRED).unwrap();
        let b = normalise(&by_columns, Orientation::Columns, &REQUIRED).unwrap();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.values, y.values);
        }
    }

    #[test]
    fn test_columns_missing_feature_appended_as_zero() {
        let t = table(
            &["Feature", "P1"],
            &[&["GLYC", "10"], &["Urea", "5"]],
        );
        let v = normalise(&t, Orientation::Columns, &REQUIRED).unwrap();
        assert_eq!(v[0].values, vec![10.0, 5.0, 0.0]);
    }

    #[test]
    fn test_columns_numeric_first_cell_rejected() {
        let t = table(&["Feature", "P1"], &[&["12.5", "10"]]);
        match normalise(&t, Orientation::Columns, &REQUIRED) {
            Err(AtriaError::BadOrientation) => {}
            other => panic!("expected BadOrientation, got {:?}", other),
        }
    }

    #[test]
    fn test_columns_blank_patient_skipped() {
        let t = table(
            &["Feature", "P1", "P2"],
            &[
                &["GLYC", "10", ""],
                &["Urea", "5", ""],
                &["Arginine", "1.5", ""],
            ],
        );
        let v = normalise(&t, Orientation::Columns, &REQUIRED).unwrap();
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].patient, 1);
    }
}
