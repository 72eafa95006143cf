//! The report pipeline: resolve the report, read every file, aggregate, print

use super::output::{info, print_table, render_json, success, warning};
use super::Cli;
use crate::core::config::{parse_delimiter, Config, OutputFormat};
use crate::core::csv_reader::{CsvReader, Row};
use crate::error::{ReportError, ReportResult};
use crate::report::{ReportRegistry, ReportRow};
use std::path::PathBuf;
use tracing::info as log_info;

/// Settings after applying command line overrides to the config file
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub delimiter: u8,
    pub format: OutputFormat,
    pub show_title: bool,
    pub verbose: bool,
}

impl RunOptions {
    pub fn resolve(cli: &Cli, config: &Config) -> ReportResult<Self> {
        let delimiter = match &cli.delimiter {
            Some(value) => parse_delimiter(value)?,
            None => config.input.delimiter_byte()?,
        };

        Ok(Self {
            delimiter,
            format: cli.format.unwrap_or(config.output.format),
            show_title: config.output.show_title && !cli.no_title,
            verbose: cli.verbose > 0,
        })
    }
}

/// Aggregated result ready for printing
#[derive(Debug, Clone)]
pub struct ReportOutput {
    pub title: String,
    pub rows: Vec<ReportRow>,
}

/// Validate and load every file, concatenating rows in file order
pub fn load_rows(files: &[PathBuf], delimiter: u8, verbose: bool) -> ReportResult<Vec<Row>> {
    let mut rows = Vec::new();

    for path in files {
        let reader = CsvReader::new(path).with_delimiter(delimiter);

        let message = crate::traced!(format!("validate {}", path.display()), reader.check_valid())?;
        log_info!("{}", message);
        if verbose {
            info(message);
        }

        let loaded = crate::traced!(format!("load {}", path.display()), reader.load())?;
        rows.extend_from_slice(loaded);
    }

    Ok(rows)
}

/// Resolve `report_name` and run it over the rows of `files`.
///
/// The report lookup happens before any file is opened.
pub fn generate_report(
    registry: &ReportRegistry,
    report_name: &str,
    files: &[PathBuf],
    delimiter: u8,
    verbose: bool,
) -> ReportResult<ReportOutput> {
    let report = registry.get(report_name)?;
    let rows = load_rows(files, delimiter, verbose)?;

    if verbose {
        success(&format!("Loaded {} rows from {} file(s)", rows.len(), files.len()));
    }

    let result = crate::traced!(
        format!("generate {}", report_name),
        Ok::<_, ReportError>(report.generate(&rows))
    )?;
    log_info!(report = report_name, groups = result.len(), "Report generated");

    if verbose && result.is_empty() && !rows.is_empty() {
        warning(&format!(
            "None of the {} loaded rows could be used by report '{}'",
            rows.len(),
            report_name
        ));
    }

    Ok(ReportOutput {
        title: report.title().to_string(),
        rows: result,
    })
}

pub fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    let options = RunOptions::resolve(&cli, config)?;
    let registry = ReportRegistry::with_defaults();

    let output = generate_report(
        &registry,
        &cli.report,
        &cli.files,
        options.delimiter,
        options.verbose,
    )?;

    match options.format {
        OutputFormat::Table => {
            let title = options.show_title.then_some(output.title.as_str());
            print_table(&output.rows, title);
        }
        OutputFormat::Json => println!("{}", render_json(&output.rows)?),
    }

    Ok(())
}
