pub mod cli;
pub mod core;
pub mod error;
pub mod report;

pub use crate::core::csv_reader::{CsvReader, Row};
pub use crate::core::numeric::{convert_to_number, is_numeric};
pub use crate::error::{ReportError, ReportResult};
pub use crate::report::{AveragePerformanceReport, Report, ReportRegistry, ReportRow, Value};
