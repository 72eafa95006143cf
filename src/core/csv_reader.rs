//! CSV file validation and loading
//!
//! A [`CsvReader`] is bound to one file. Both the validity check and the
//! parsed rows are computed on first access and memoized, so repeated calls
//! never touch the file system again. Failures are not memoized.

use crate::error::{ReportError, ReportResult};
use csv::{ReaderBuilder, StringRecord};
use indexmap::IndexMap;
use once_cell::unsync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// One data line keyed by header name, in header order
pub type Row = IndexMap<String, String>;

pub const DEFAULT_DELIMITER: u8 = b',';

#[derive(Debug)]
pub struct CsvReader {
    path: PathBuf,
    delimiter: u8,
    validity: OnceCell<String>,
    rows: OnceCell<Vec<Row>>,
}

impl CsvReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: DEFAULT_DELIMITER,
            validity: OnceCell::new(),
            rows: OnceCell::new(),
        }
    }

    /// Use a delimiter other than comma
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Validate the file and return a confirmation containing the row count.
    ///
    /// Fails with `NotFound` for a missing path, `InvalidFormat` for a non
    /// `.csv` extension, and `MalformedData` when the file has no data rows
    /// or a row whose field count differs from the header.
    pub fn check_valid(&self) -> ReportResult<&str> {
        self.validity
            .get_or_try_init(|| self.compute_validity())
            .map(String::as_str)
    }

    /// Parse the file into rows keyed by the header names
    pub fn load(&self) -> ReportResult<&[Row]> {
        self.rows
            .get_or_try_init(|| self.parse_rows())
            .map(Vec::as_slice)
    }

    fn ensure_readable(&self) -> ReportResult<()> {
        if !self.path.exists() {
            return Err(ReportError::NotFound(format!(
                "File '{}' does not exist",
                self.path.display()
            )));
        }

        let is_csv = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if !is_csv {
            return Err(ReportError::InvalidFormat(format!(
                "File '{}' is not a CSV file",
                self.path.display()
            )));
        }

        Ok(())
    }

    fn builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        // Flexible so that ragged rows reach the explicit column check
        builder
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true);
        builder
    }

    fn compute_validity(&self) -> ReportResult<String> {
        self.ensure_readable()?;

        let mut reader = self.builder().from_path(&self.path)?;
        let expected = reader.headers()?.len();

        let mut count = 0usize;
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() != expected {
                return Err(column_mismatch(&self.path, index + 1, expected, record.len()));
            }
            count += 1;
        }

        if count == 0 {
            return Err(ReportError::MalformedData(format!(
                "File '{}' is empty",
                self.path.display()
            )));
        }

        debug!(path = %self.path.display(), rows = count, "CSV file validated");
        Ok(format!(
            "File '{}' is valid: {} rows",
            self.path.display(),
            count
        ))
    }

    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn parse_rows(&self) -> ReportResult<Vec<Row>> {
        self.ensure_readable()?;

        let mut reader = self.builder().from_path(&self.path)?;
        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() != headers.len() {
                return Err(column_mismatch(
                    &self.path,
                    index + 1,
                    headers.len(),
                    record.len(),
                ));
            }
            rows.push(to_row(&headers, &record));
        }

        debug!(rows = rows.len(), "CSV file loaded");
        Ok(rows)
    }
}

fn to_row(headers: &StringRecord, record: &StringRecord) -> Row {
    headers
        .iter()
        .zip(record.iter())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn column_mismatch(path: &Path, row: usize, expected: usize, found: usize) -> ReportError {
    ReportError::MalformedData(format!(
        "More or less columns than header in row {} of '{}' (expected {}, found {})",
        row,
        path.display(),
        expected,
        found
    ))
}
