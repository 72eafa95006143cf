//! Error types for csv-reports

use thiserror::Error;

/// Main error type for report operations
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Malformed data: {0}")]
    MalformedData(String),

    /// A single cell could not be interpreted. Aggregations recover from this
    /// locally by skipping the row.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for report operations
pub type ReportResult<T> = Result<T, ReportError>;

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io_err) => ReportError::Io(io_err),
                other => ReportError::MalformedData(format!("{:?}", other)),
            }
        } else {
            ReportError::MalformedData(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Io(err.into())
    }
}
