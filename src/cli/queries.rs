//! Queries command implementation

use std::path::Path;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::{Error, Result};
use crate::models::{QueryDisplay, ScanSummary, Severity};
use crate::output::{self, Formattable, json::format_json, table::format_table};

/// Query rows selected from a parsed report
pub struct QueryListView<'a> {
    pub report: &'a Path,
    pub severity: Option<Severity>,
    pub summary: &'a ScanSummary,
}

impl Formattable for QueryListView<'_> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        let rows = QueryDisplay::from_summary(self.summary, self.severity);
        match format {
            OutputFormat::Json => Ok(format_json(&rows, Some(&self.report.display().to_string()))?),
            OutputFormat::Table | OutputFormat::Pretty => Ok(format_table(&rows, &[2])),
        }
    }
}

/// Run the queries command
pub fn run(opts: &GlobalOptions, report: &Path, severity: Option<Severity>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let summary = ctx.parser.parse_file(report);

    if !summary.is_valid {
        return Err(Error::Other(format!(
            "Could not parse report {}: {}",
            report.display(),
            summary.error_message.as_deref().unwrap_or("unknown error")
        )));
    }

    output::print(
        &QueryListView {
            report,
            severity,
            summary: &summary,
        },
        ctx.format,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QueryResult;

    #[test]
    fn test_query_list_view_json_filtered() {
        let mut summary = ScanSummary::default();
        summary.push_query(
            Severity::High,
            QueryResult {
                name: "SQL_Injection".to_string(),
                severity: Some("3".to_string()),
                count: 3,
            },
        );
        summary.push_query(
            Severity::Low,
            QueryResult {
                name: "Log_Forging".to_string(),
                severity: Some("1".to_string()),
                count: 1,
            },
        );

        let view = QueryListView {
            report: Path::new("scan.xml"),
            severity: Some(Severity::High),
            summary: &summary,
        };

        let json = view.format(OutputFormat::Json).unwrap();
        assert!(json.contains("SQL_Injection"));
        assert!(!json.contains("Log_Forging"));

        let table = view.format(OutputFormat::Table).unwrap();
        assert!(table.contains("SQL_Injection"));
    }

    #[test]
    fn test_query_list_view_empty() {
        let summary = ScanSummary::default();
        let view = QueryListView {
            report: Path::new("scan.xml"),
            severity: None,
            summary: &summary,
        };

        assert_eq!(
            view.format(OutputFormat::Pretty).unwrap(),
            "No results found."
        );
    }
}
