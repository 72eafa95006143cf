//! Average performance per position

use super::{Report, ReportRow, Row, Value};
use crate::core::numeric::convert_to_number;
use indexmap::IndexMap;
use tracing::debug;

const POSITION: &str = "position";
const PERFORMANCE: &str = "performance";

/// Average performance grouped by position, best first
#[derive(Debug, Default, Clone)]
pub struct AveragePerformanceReport;

impl Report for AveragePerformanceReport {
    fn title(&self) -> &str {
        "Average performance by position"
    }

    fn generate(&self, rows: &[Row]) -> Vec<ReportRow> {
        // Insertion order of the map is the order positions were first seen
        let mut groups: IndexMap<&str, Vec<f64>> = IndexMap::new();
        let mut skipped = 0usize;

        for row in rows {
            let (Some(position), Some(raw)) = (row.get(POSITION), row.get(PERFORMANCE)) else {
                skipped += 1;
                continue;
            };

            match convert_to_number(raw) {
                Ok(value) => groups.entry(position.as_str()).or_default().push(value),
                Err(e) => {
                    debug!("Skipping row for '{}': {}", position, e);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            debug!(skipped, "Rows without a usable performance value were ignored");
        }

        let mut averages: Vec<(&str, f64)> = groups
            .into_iter()
            .map(|(position, values)| {
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                (position, round2(mean))
            })
            .collect();

        // sort_by is stable, ties keep discovery order
        averages.sort_by(|a, b| b.1.total_cmp(&a.1));

        averages
            .into_iter()
            .map(|(position, performance)| {
                let mut row = ReportRow::new();
                row.insert(POSITION.to_string(), Value::from(position));
                row.insert(PERFORMANCE.to_string(), Value::from(performance));
                row
            })
            .collect()
    }
}

/// Round half away from zero to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(name: &str, position: &str, performance: &str) -> Row {
        let mut row = Row::new();
        row.insert("name".to_string(), name.to_string());
        row.insert("position".to_string(), position.to_string());
        row.insert("performance".to_string(), performance.to_string());
        row
    }

    fn perf_data() -> Vec<Row> {
        vec![
            row("John", "Backend Developer", "4.8"),
            row("Jane", "Backend Developer", "4.6"),
            row("Bob", "Frontend Developer", "4.7"),
            row("Alice", "Frontend Developer", "4.9"),
            row("Mike", "QA Engineer", "4.5"),
        ]
    }

    fn pairs(result: &[ReportRow]) -> Vec<(String, f64)> {
        result
            .iter()
            .map(|r| {
                (
                    r["position"].as_str().unwrap().to_string(),
                    r["performance"].as_f64().unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_generate_valid_data() {
        let result = AveragePerformanceReport.generate(&perf_data());

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|r| r.contains_key("position")));
        assert!(result.iter().all(|r| r.contains_key("performance")));
    }

    #[test]
    fn test_generate_sorted_by_performance_desc() {
        let result = AveragePerformanceReport.generate(&perf_data());

        assert_eq!(
            pairs(&result),
            vec![
                ("Frontend Developer".to_string(), 4.8),
                ("Backend Developer".to_string(), 4.7),
                ("QA Engineer".to_string(), 4.5),
            ]
        );
    }

    #[test]
    fn test_generate_column_order() {
        let result = AveragePerformanceReport.generate(&perf_data());
        let keys: Vec<&str> = result[0].keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["position", "performance"]);
    }

    #[test]
    fn test_generate_empty_data() {
        assert!(AveragePerformanceReport.generate(&[]).is_empty());
    }

    #[test]
    fn test_generate_all_invalid_values() {
        let data = vec![row("John", "Developer", "invalid")];

        assert!(AveragePerformanceReport.generate(&data).is_empty());
    }

    #[test]
    fn test_generate_single_row() {
        let data = perf_data()[..1].to_vec();
        let result = AveragePerformanceReport.generate(&data);

        assert_eq!(pairs(&result), vec![("Backend Developer".to_string(), 4.8)]);
    }

    #[test]
    fn test_generate_mixed_valid_invalid() {
        let data = vec![
            row("John", "Developer", "4.5"),
            row("Jane", "Developer", "invalid"),
            row("Bob", "Developer", "4.9"),
            row("Alice", "Tester", ""),
            row("Mike", "Tester", "4.6"),
        ];

        let result = AveragePerformanceReport.generate(&data);

        assert_eq!(
            pairs(&result),
            vec![
                ("Developer".to_string(), 4.7),
                ("Tester".to_string(), 4.6),
            ]
        );
    }

    #[test]
    fn test_generate_drops_positions_without_numeric_rows() {
        let data = vec![
            row("John", "Developer", "4.0"),
            row("Alice", "Tester", "n/a"),
            row("Mike", "Tester", ""),
        ];

        let result = AveragePerformanceReport.generate(&data);

        assert_eq!(pairs(&result), vec![("Developer".to_string(), 4.0)]);
    }

    #[test]
    fn test_generate_rounding() {
        let data = vec![
            row("John", "Developer", "4.333"),
            row("Jane", "Developer", "4.666"),
        ];

        let result = AveragePerformanceReport.generate(&data);

        assert_eq!(pairs(&result), vec![("Developer".to_string(), 4.5)]);
    }

    #[test]
    fn test_generate_ties_keep_discovery_order() {
        let data = vec![
            row("A", "Support", "4.0"),
            row("B", "Design", "5.0"),
            row("C", "Ops", "4.0"),
            row("D", "Sales", "4.0"),
        ];

        let result = AveragePerformanceReport.generate(&data);

        assert_eq!(
            pairs(&result),
            vec![
                ("Design".to_string(), 5.0),
                ("Support".to_string(), 4.0),
                ("Ops".to_string(), 4.0),
                ("Sales".to_string(), 4.0),
            ]
        );
    }

    #[test]
    fn test_generate_skips_rows_missing_columns() {
        let mut partial = Row::new();
        partial.insert("position".to_string(), "Developer".to_string());

        let data = vec![partial, row("Jane", "Developer", "3.5")];
        let result = AveragePerformanceReport.generate(&data);

        assert_eq!(pairs(&result), vec![("Developer".to_string(), 3.5)]);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(4.4995), 4.5);
        assert_eq!(round2(4.7), 4.7);
        assert_eq!(round2(3.14159), 3.14);
    }
}
