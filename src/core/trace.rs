//! Logging setup and call tracing
//!
//! `traced` wraps an operation with start/finish events and logs failures
//! before handing them back to the caller untouched.

use super::config::LoggingConfig;
use crate::error::{ReportError, ReportResult};
use std::fmt::Display;
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Run `f`, logging its start, completion time and any error it returns
pub fn traced<T, E, F>(location: &str, operation: &str, f: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: Display,
{
    debug!("[{}] Start {}", location, operation);
    let started = Instant::now();

    match f() {
        Ok(value) => {
            debug!(
                "[{}] Completed {} in {} ms",
                location,
                operation,
                started.elapsed().as_millis()
            );
            Ok(value)
        }
        Err(e) => {
            error!("[{}] {} failed: {}", location, operation, e);
            Err(e)
        }
    }
}

/// Trace an expression returning `Result`, tagged with the calling module and line
///
/// Usage:
/// ```
/// # use csv_reports::traced;
/// let value: Result<u32, String> = traced!("compute answer", Ok(42));
/// assert_eq!(value, Ok(42));
/// ```
#[macro_export]
macro_rules! traced {
    ($operation:expr, $body:expr) => {
        $crate::core::trace::traced(
            concat!(module_path!(), ":", line!()),
            &$operation,
            || $body,
        )
    };
}

/// Install the global subscriber.
///
/// Each `-v` raises the level above the configured one and turns on stderr
/// output. Returns the log file path when file logging is enabled.
pub fn init_logging(config: &LoggingConfig, verbosity: u8) -> ReportResult<Option<PathBuf>> {
    let level = match verbosity {
        0 => config.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_new(level)
        .map_err(|e| ReportError::Configuration(format!("Invalid log level '{}': {}", level, e)))?;

    let console_layer = (config.to_console || verbosity > 0)
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    let (file_layer, log_path) = if config.to_file {
        let dir = PathBuf::from(&config.dir);
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!(
            "app_{}.log",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        ));
        let file = File::create(&path)?;
        let layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
        (Some(layer), Some(path))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ReportError::Configuration(format!("Failed to initialize logging: {}", e)))?;

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traced_passes_value_through() {
        let result: Result<Vec<u32>, String> = traced("tests:1", "collect", || Ok(vec![1, 2, 3]));
        assert_eq!(result, Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_traced_returns_error_unchanged() {
        let result: Result<(), ReportError> = traced("tests:1", "load", || {
            Err(ReportError::NotFound("File 'x.csv' does not exist".to_string()))
        });

        match result {
            Err(ReportError::NotFound(msg)) => assert_eq!(msg, "File 'x.csv' does not exist"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_traced_macro_runs_body_once() {
        let mut calls = 0;
        let result: Result<i32, String> = crate::traced!("count calls", {
            calls += 1;
            Ok(calls)
        });

        assert_eq!(result, Ok(1));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_init_logging_rejects_bad_level() {
        let config = LoggingConfig {
            level: "csv_reports=loudest".to_string(),
            ..LoggingConfig::default()
        };

        assert!(matches!(
            init_logging(&config, 0),
            Err(ReportError::Configuration(_))
        ));
    }
}
