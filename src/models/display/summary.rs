//! Scan summary display models and helpers

use serde::Serialize;
use tabled::Tabled;

use super::common::or_placeholder;
use crate::models::{ScanSummary, Severity};

/// Per-severity row for the `summary` table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SeverityRowDisplay {
    /// Severity level
    #[tabled(rename = "SEVERITY")]
    pub severity: String,

    /// Total non-false-positive results
    #[tabled(rename = "TOTAL")]
    pub total: u32,

    /// Newly introduced results ("--" for Info)
    #[tabled(rename = "NEW")]
    pub new: String,

    /// Number of distinct queries
    #[tabled(rename = "QUERIES")]
    pub queries: usize,
}

impl SeverityRowDisplay {
    /// One row per severity, highest first
    pub fn from_summary(summary: &ScanSummary) -> Vec<Self> {
        Severity::ALL
            .iter()
            .map(|s| Self {
                severity: s.to_string(),
                total: summary.count(*s),
                new: summary
                    .new_count(*s)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "--".to_string()),
                queries: summary.queries(*s).len(),
            })
            .collect()
    }
}

/// Multi-section text rendering of a scan summary (`summary` pretty output)
#[derive(Debug, Clone)]
pub struct SummaryOverview<'a> {
    pub summary: &'a ScanSummary,
}

impl<'a> SummaryOverview<'a> {
    pub fn new(summary: &'a ScanSummary) -> Self {
        Self { summary }
    }

    /// Format as multi-section text output
    pub fn format_text(&self) -> String {
        let summary = self.summary;
        let mut output = String::new();

        // Metadata
        output.push_str(&format!(
            "Scan type:  {}\n",
            or_placeholder(summary.scan_type.as_deref())
        ));
        output.push_str(&format!(
            "Started:    {}\n",
            or_placeholder(summary.scan_start.as_deref())
        ));
        output.push_str(&format!(
            "Finished:   {}\n",
            or_placeholder(summary.scan_end.as_deref())
        ));
        output.push_str(&format!(
            "Files:      {}\n",
            or_placeholder(summary.files_scanned.as_deref())
        ));
        output.push_str(&format!(
            "LOC:        {}\n",
            or_placeholder(summary.lines_of_code_scanned.as_deref())
        ));

        // Findings
        output.push_str("\nFindings\n");
        output.push_str("────────────────────────────────────────────────────\n");
        for severity in Severity::ALL {
            let label = severity.to_string().to_uppercase();
            match summary.new_count(severity) {
                Some(new) => output.push_str(&format!(
                    "  {:<8} {:>5} total  {:>5} new\n",
                    label,
                    summary.count(severity),
                    new
                )),
                None => output.push_str(&format!(
                    "  {:<8} {:>5} total\n",
                    label,
                    summary.count(severity)
                )),
            }
        }

        // Top queries per severity
        let mut any_queries = false;
        for severity in Severity::ALL {
            let queries = summary.queries(severity);
            if queries.is_empty() {
                continue;
            }
            if !any_queries {
                output.push_str("\nQueries\n");
                output.push_str("────────────────────────────────────────────────────\n");
                any_queries = true;
            }
            for query in queries {
                output.push_str(&format!(
                    "  {:<8} {:>5}  {}\n",
                    severity.to_string().to_uppercase(),
                    query.count,
                    query.name
                ));
            }
        }

        if !summary.deep_link.is_empty() {
            output.push_str(&format!("\n→ {}\n", summary.deep_link));
        }

        output
    }
}
