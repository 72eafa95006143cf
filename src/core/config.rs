//! Configuration types for csv-reports

use crate::error::{ReportError, ReportResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Field separator, a single ASCII character
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    #[serde(default = "default_show_title")]
    pub show_title: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "warn" or "csv_reports=debug"
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_to_console")]
    pub to_console: bool,
    #[serde(default)]
    pub to_file: bool,
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

// Default value functions
fn default_delimiter() -> String { ",".to_string() }
fn default_format() -> OutputFormat { OutputFormat::Table }
fn default_show_title() -> bool { true }
fn default_level() -> String { "warn".to_string() }
fn default_to_console() -> bool { false }
fn default_log_dir() -> String { "logs".to_string() }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_title: default_show_title(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            to_console: default_to_console(),
            to_file: false,
            dir: default_log_dir(),
        }
    }
}

impl InputConfig {
    /// The delimiter as the single byte the CSV parser expects
    pub fn delimiter_byte(&self) -> ReportResult<u8> {
        parse_delimiter(&self.delimiter)
    }
}

pub fn parse_delimiter(value: &str) -> ReportResult<u8> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(ReportError::Configuration(format!(
            "Delimiter must be a single ASCII character, got '{}'",
            value
        ))),
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> ReportResult<Config> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ReportError::NotFound(format!(
            "Config file '{}' does not exist",
            path.display()
        )));
    }

    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| ReportError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> ReportResult<()> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| ReportError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
