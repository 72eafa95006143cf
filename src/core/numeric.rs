//! Helpers for interpreting CSV cells as numbers

use crate::error::{ReportError, ReportResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Optional sign, digits with at most one decimal point. No exponents.
static NUMERIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)$").expect("numeric pattern is valid")
});

/// Check whether a cell holds a base-10 integer or decimal literal
pub fn is_numeric(value: &str) -> bool {
    NUMERIC_PATTERN.is_match(value.trim())
}

/// Convert a cell to a number, failing with `InvalidValue` for anything
/// `is_numeric` rejects
pub fn convert_to_number(value: &str) -> ReportResult<f64> {
    let trimmed = value.trim();
    if !is_numeric(trimmed) {
        return Err(ReportError::InvalidValue(format!(
            "'{}' is not a number",
            value
        )));
    }

    trimmed
        .parse::<f64>()
        .map_err(|e| ReportError::InvalidValue(format!("'{}': {}", value, e)))
}
