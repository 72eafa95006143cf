use clap::Parser;
use colored::*;
use csv_reports::cli::{command, output, Cli};
use csv_reports::core::{init_logging, load_config, Config};
use csv_reports::ReportError;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::error(&format!("{} {}", "Error:".red().bold(), e));

        // clap already exits with 2 on usage errors
        let exit_code = match e.downcast_ref::<ReportError>() {
            Some(ReportError::NotFound(_)) => 3,
            Some(ReportError::InvalidFormat(_)) => 4,
            Some(ReportError::MalformedData(_)) => 5,
            Some(ReportError::Configuration(_)) => 6,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    if let Some(log_file) = init_logging(&config.logging, cli.verbose)? {
        tracing::debug!("Writing log to {}", log_file.display());
    }

    command::run(cli, &config)
}
