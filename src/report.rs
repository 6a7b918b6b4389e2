/*!
 * Reporting functionality for filecopy
 *
 * Renders the end-of-run summary with the tabled library: a result table
 * naming the output file, followed by the statistics gathered while the
 * document was built.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::RunSummary;
use crate::utils::format_file_size;

/// Report generator for a finished run
#[derive(Debug, Default)]
pub struct Reporter;

impl Reporter {
    /// Create a new reporter
    pub fn new() -> Self {
        Self
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate the full report text
    pub fn generate_report(&self, summary: &RunSummary, duration: Duration) -> String {
        format!(
            "{}\n{}",
            self.create_result_table(summary),
            self.create_statistics_table(summary, duration)
        )
    }

    /// Print the report to stdout
    pub fn print_report(&self, summary: &RunSummary, duration: Duration) {
        println!("\n{}", self.generate_report(summary, duration));
    }

    /// Two-column table: status and output path
    pub fn create_result_table(&self, summary: &RunSummary) -> String {
        #[derive(Tabled)]
        struct ResultRow {
            #[tabled(rename = "Result")]
            status: String,

            #[tabled(rename = "Path")]
            path: String,
        }

        let rows = vec![ResultRow {
            status: "Success".to_string(),
            path: summary.output_file.display().to_string(),
        }];

        self.style(Table::new(rows))
    }

    fn create_statistics_table(&self, summary: &RunSummary, duration: Duration) -> String {
        #[derive(Tabled)]
        struct StatRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let stats = &summary.statistics;
        let rows = vec![
            StatRow {
                key: "Files Processed",
                value: self.format_number(stats.files_processed),
            },
            StatRow {
                key: "Read Failures",
                value: self.format_number(stats.read_failures),
            },
            StatRow {
                key: "Total Lines",
                value: self.format_number(stats.total_lines),
            },
            StatRow {
                key: "Total Characters",
                value: self.format_number(stats.total_chars),
            },
            StatRow {
                key: "Output Size",
                value: format_file_size(summary.output_bytes),
            },
            StatRow {
                key: "Clipboard",
                value: match &summary.clipboard {
                    Some(provider) => format!("copied ({})", provider),
                    None => "unavailable".to_string(),
                },
            },
            StatRow {
                key: "Process Time",
                value: format!("{:.4?}", duration),
            },
        ];

        self.style(Table::new(rows))
    }

    fn style(&self, mut table: Table) -> String {
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BuildStatistics;
    use std::path::PathBuf;

    fn summary() -> RunSummary {
        RunSummary {
            output_file: PathBuf::from("output.md"),
            output_bytes: 2048,
            statistics: BuildStatistics {
                files_processed: 12,
                read_failures: 1,
                total_lines: 1500,
                total_chars: 40_000,
            },
            clipboard: Some("native".to_string()),
        }
    }

    #[test]
    fn test_result_table_columns() {
        let table = Reporter::new().create_result_table(&summary());
        assert!(table.contains("Result"));
        assert!(table.contains("Path"));
        assert!(table.contains("Success"));
        assert!(table.contains("output.md"));
    }

    #[test]
    fn test_report_includes_statistics() {
        let report = Reporter::new().generate_report(&summary(), Duration::from_millis(5));
        assert!(report.contains("1.5K"));
        assert!(report.contains("Total Characters"));
        assert!(report.contains("40.0K"));
        assert!(report.contains("2.00 KB"));
        assert!(report.contains("copied (native)"));
    }

    #[test]
    fn test_format_number() {
        let reporter = Reporter::new();
        assert_eq!(reporter.format_number(999), "999");
        assert_eq!(reporter.format_number(1_500), "1.5K");
        assert_eq!(reporter.format_number(2_000_000), "2.0M");
    }
}
