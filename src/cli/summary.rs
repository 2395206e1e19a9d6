//! Summary command implementation

use std::path::Path;

use colored::Colorize;
use log::debug;

use crate::cli::args::{GlobalOptions, ThresholdViolation};
use crate::cli::{CommandContext, OutputFormat, ThresholdArgs};
use crate::error::{Error, Result};
use crate::models::{ScanSummary, SeverityRowDisplay, SummaryOverview};
use crate::output::{self, Formattable, json::format_json, table::format_table};

/// A parsed report together with the file it came from
pub struct SummaryView<'a> {
    pub report: &'a Path,
    pub summary: &'a ScanSummary,
}

impl Formattable for SummaryView<'_> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(format_json(
                self.summary,
                Some(&self.report.display().to_string()),
            )?),
            OutputFormat::Table => Ok(format_table(
                &SeverityRowDisplay::from_summary(self.summary),
                &[1, 2, 3],
            )),
            OutputFormat::Pretty => Ok(self.format_pretty()),
        }
    }
}

impl SummaryView<'_> {
    fn format_pretty(&self) -> String {
        let mut output = format!(
            "{} {}\n",
            "Scan Summary:".bold(),
            self.report.display().to_string().cyan()
        );
        output.push_str("══════════════════════════════════════════════════════\n");

        if !self.summary.is_valid {
            let reason = self.summary.error_message.as_deref().unwrap_or("unknown error");
            output.push_str(&format!("{} Report is invalid: {}\n", "✗".red(), reason));
            output.push_str("  Counts below cover the part of the report read before the failure.\n\n");
        }

        output.push_str(&SummaryOverview::new(self.summary).format_text());
        output
    }
}

/// Run the summary command
pub fn run(opts: &GlobalOptions, report: &Path, thresholds: &ThresholdArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let summary = ctx.parser.parse_file(report);
    debug!(
        "Report {} valid={} total={}",
        report.display(),
        summary.is_valid,
        summary.total_count()
    );

    output::print(&SummaryView { report, summary: &summary }, ctx.format)?;

    if !summary.is_valid {
        return Err(Error::Other(format!(
            "Could not parse report {}: {}",
            report.display(),
            summary.error_message.as_deref().unwrap_or("unknown error")
        )));
    }

    check_thresholds(thresholds, &summary)
}

/// Fail when any severity count is above its threshold
fn check_thresholds(thresholds: &ThresholdArgs, summary: &ScanSummary) -> Result<()> {
    if thresholds.is_empty() {
        return Ok(());
    }

    let violations = thresholds.violations(summary);
    if violations.is_empty() {
        return Ok(());
    }

    let message = violations
        .iter()
        .map(ThresholdViolation::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(Error::Threshold(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    fn summary() -> ScanSummary {
        let mut summary = ScanSummary::default();
        summary.record_result(Severity::High, true);
        summary.record_result(Severity::High, true);
        summary.record_result(Severity::Medium, false);
        summary.finish();
        summary
    }

    #[test]
    fn test_check_thresholds_passes() {
        let thresholds = ThresholdArgs {
            high_threshold: Some(2),
            medium_threshold: Some(1),
            low_threshold: None,
        };
        assert!(check_thresholds(&thresholds, &summary()).is_ok());
        assert!(check_thresholds(&ThresholdArgs::default(), &summary()).is_ok());
    }

    #[test]
    fn test_check_thresholds_fails() {
        let thresholds = ThresholdArgs {
            high_threshold: Some(1),
            medium_threshold: Some(0),
            low_threshold: None,
        };

        match check_thresholds(&thresholds, &summary()) {
            Err(Error::Threshold(msg)) => {
                assert!(msg.contains("High results 2 exceed threshold 1"));
                assert!(msg.contains("Medium results 1 exceed threshold 0"));
            }
            other => panic!("Expected threshold error, got {:?}", other),
        }
    }

    #[test]
    fn test_summary_view_formats() {
        let summary = summary();
        let view = SummaryView {
            report: Path::new("scan.xml"),
            summary: &summary,
        };

        let json = view.format(OutputFormat::Json).unwrap();
        assert!(json.contains("\"highCount\": 2"));
        assert!(json.contains("scan.xml"));

        let table = view.format(OutputFormat::Table).unwrap();
        assert!(table.contains("SEVERITY"));
        assert!(table.contains("High"));

        let pretty = view.format(OutputFormat::Pretty).unwrap();
        assert!(pretty.contains("Scan Summary:"));
        assert!(pretty.contains("Findings"));
        assert!(!pretty.contains("invalid"));
    }

    #[test]
    fn test_pretty_marks_invalid_report() {
        let mut summary = ScanSummary::default();
        summary.fail("unexpected end of file");
        let view = SummaryView {
            report: Path::new("broken.xml"),
            summary: &summary,
        };

        let pretty = view.format(OutputFormat::Pretty).unwrap();
        assert!(pretty.contains("Report is invalid: unexpected end of file"));
    }
}
