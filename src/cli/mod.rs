//! Command line interface

pub mod command;
pub mod output;

use crate::core::config::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "csv-reports",
    version,
    about = "Build aggregate reports from CSV files of employee records",
    long_about = "csv-reports validates one or more CSV files, merges their rows and prints \
                  the selected report (for example average performance by position) as a table."
)]
pub struct Cli {
    /// CSV files to read (one or more)
    #[arg(long, value_name = "FILE", num_args = 1.., required = true)]
    pub files: Vec<PathBuf>,

    /// Name of the report to build (e.g. "performance")
    #[arg(long, value_name = "NAME")]
    pub report: String,

    /// Field delimiter, overrides the config file
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Output format, overrides the config file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Do not print the report title above the table
    #[arg(long)]
    pub no_title: bool,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
