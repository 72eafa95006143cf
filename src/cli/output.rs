//! Standard output utilities for reports and status messages

use crate::error::ReportResult;
use colored::*;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::Display;

pub const NO_DATA: &str = "No data to display";

/// Display an info message
pub fn info(message: &str) {
    eprintln!("{} {}", "●".blue(), message);
}

/// Display a success message
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Display a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Display an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Create the grid table used for every report
pub fn create_standard_table() -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table
}

/// Render uniform rows as a bordered grid.
///
/// Columns come from the first row's keys. A title, when given, is printed
/// above the grid and underlined with `=`.
pub fn render_table<V: Display>(rows: &[IndexMap<String, V>], title: Option<&str>) -> String {
    let Some(first) = rows.first() else {
        return NO_DATA.to_string();
    };

    let headers: Vec<&String> = first.keys().collect();

    let mut table = create_standard_table();
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).set_alignment(CellAlignment::Center)),
    );

    for row in rows {
        table.add_row(headers.iter().map(|h| {
            row.get(h.as_str())
                .map(Cell::new)
                .unwrap_or_else(|| Cell::new(""))
        }));
    }

    match title {
        Some(title) => format!(
            "{}\n{}\n{}",
            title,
            "=".repeat(title.chars().count()),
            table
        ),
        None => table.to_string(),
    }
}

/// Print rows as a table on stdout
pub fn print_table<V: Display>(rows: &[IndexMap<String, V>], title: Option<&str>) {
    println!("{}", render_table(rows, title));
}

/// Render rows as a pretty JSON array
pub fn render_json<V: Serialize>(rows: &[IndexMap<String, V>]) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}
