//! Report definitions and name-based dispatch

pub mod performance;
pub mod registry;

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

pub use crate::core::csv_reader::Row;
pub use performance::AveragePerformanceReport;
pub use registry::{ReportFactory, ReportRegistry};

/// A single cell of a report result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Number(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

/// One aggregated output line, keyed by column name in display order
pub type ReportRow = IndexMap<String, Value>;

/// A pure transformation from loaded rows to aggregated, sorted rows
pub trait Report {
    /// Heading shown above the rendered table
    fn title(&self) -> &str;

    fn generate(&self, rows: &[Row]) -> Vec<ReportRow>;
}
