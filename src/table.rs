//! Two-column delimited text ingestion.
//!
//! Reads tables such as
//!
//! ```text
//! # t, y
//! 0.0, 1.0
//! 0.5, 0.8
//! ```
//!
//! into a [`SampleSeries`]. There is no header row; lines starting with `#`
//! and blank lines are skipped. The first column is time, the second
//! amplitude, and any further columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::error::{Error, Result};
use crate::series::SampleSeries;

/// Options for [`read_samples_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Comment marker; lines starting with it are skipped.
    pub comment: Option<u8>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            comment: Some(b'#'),
        }
    }
}

/// Read a comma-delimited table with default options.
pub fn read_samples<R: Read>(reader: R) -> Result<SampleSeries> {
    read_samples_with(reader, TableOptions::default())
}

/// Read a table from a file path with default options.
pub fn read_samples_from_path<P: AsRef<Path>>(path: P) -> Result<SampleSeries> {
    let file = File::open(path.as_ref())?;
    tracing::debug!(path = %path.as_ref().display(), "reading sample table");
    read_samples(file)
}

/// Read a table with explicit options.
///
/// # Errors
/// `Table` for a row with fewer than two fields or a field that is not a
/// number, `Csv` for reader failures, and `InvalidInput` if no rows remain
/// or a value is non-finite.
pub fn read_samples_with<R: Read>(reader: R, options: TableOptions) -> Result<SampleSeries> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(options.delimiter)
        .comment(options.comment)
        .from_reader(reader);

    let mut times = Vec::new();
    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let (t, y) = parse_row(&record, line)?;
        times.push(t);
        values.push(y);
    }

    tracing::debug!(rows = times.len(), "parsed sample table");
    SampleSeries::new(times, values)
}

fn parse_row(record: &StringRecord, line: u64) -> Result<(f64, f64)> {
    if record.len() < 2 {
        return Err(Error::Table {
            line,
            message: format!("expected 2 columns, found {}", record.len()),
        });
    }
    Ok((parse_field(record, 0, line)?, parse_field(record, 1, line)?))
}

fn parse_field(record: &StringRecord, column: usize, line: u64) -> Result<f64> {
    let raw = record.get(column).unwrap_or("");
    raw.parse::<f64>().map_err(|e| Error::Table {
        line,
        message: format!("column {}: cannot parse {:?}: {}", column + 1, raw, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputProblem;

    #[test]
    fn test_read_two_columns() {
        let text = "# t, y\n0.0, 1.0\n0.5,0.8\n\n1.0 , -0.25, ignored\n";
        let series = read_samples(text.as_bytes()).unwrap();
        assert_eq!(series.times(), &[0.0, 0.5, 1.0]);
        assert_eq!(series.values(), &[1.0, 0.8, -0.25]);
    }

    #[test]
    fn test_custom_delimiter() {
        let text = "0\t2\n1\t3\n";
        let options = TableOptions {
            delimiter: b'\t',
            ..TableOptions::default()
        };
        let series = read_samples_with(text.as_bytes(), options).unwrap();
        assert_eq!(series.values(), &[2.0, 3.0]);
    }

    #[test]
    fn test_short_row_reports_line() {
        let text = "0.0, 1.0\n0.5\n";
        let err = read_samples(text.as_bytes()).unwrap_err();
        match err {
            Error::Table { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("expected 2 columns"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_number() {
        let err = read_samples("0.0, abc\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Table { line: 1, .. }));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let err = read_samples("0.0, 1.0\n1.0, NaN\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InputProblem::NonFinite { index: 1, .. })
        ));
    }

    #[test]
    fn test_empty_table() {
        let err = read_samples("# nothing here\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(InputProblem::Empty)));
    }
}
