//! Query result display models

use serde::Serialize;
use tabled::Tabled;

use super::common::truncate_string;
use crate::models::{QueryResult, ScanSummary, Severity};

/// Query display model for `queries` table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct QueryDisplay {
    /// Severity bucket the query was placed in
    #[tabled(rename = "SEVERITY")]
    pub severity: String,

    /// Query (rule) name
    #[tabled(rename = "QUERY")]
    pub name: String,

    /// Non-false-positive results under the query
    #[tabled(rename = "RESULTS")]
    pub results: u32,
}

impl QueryDisplay {
    /// Build a row for a query placed under `severity`
    pub fn new(severity: Severity, query: &QueryResult) -> Self {
        let name = if query.name.is_empty() {
            "(unnamed)".to_string()
        } else {
            truncate_string(&query.name, 50)
        };

        Self {
            severity: severity.to_string(),
            name,
            results: query.count,
        }
    }

    /// Rows for every query in the summary, optionally limited to one severity.
    ///
    /// Rows are ordered highest severity first, then in document order.
    pub fn from_summary(summary: &ScanSummary, only: Option<Severity>) -> Vec<Self> {
        Severity::ALL
            .iter()
            .copied()
            .filter(|s| only.is_none_or(|o| o == *s))
            .flat_map(|s| summary.queries(s).iter().map(move |q| Self::new(s, q)))
            .collect()
    }
}
