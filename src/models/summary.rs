//! Aggregated scan summary built from a SAST XML report

use serde::{Deserialize, Serialize};

use super::severity::Severity;

/// Encoding used for an empty (or unencodable) query list
pub const EMPTY_QUERIES_JSON: &str = "[]";

/// Aggregated results for a single query (rule) in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Query name, empty if the report omitted it
    pub name: String,

    /// Raw `SeverityIndex` token declared on the query
    pub severity: Option<String>,

    /// Number of non-false-positive results under the query
    pub count: u32,
}

/// Summary of a parsed scan report.
///
/// Created once per parse pass and handed to the caller when the pass ends,
/// whether or not it succeeded. Counts gathered before a structural failure
/// are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub high_count: u32,
    pub medium_count: u32,
    pub low_count: u32,
    pub info_count: u32,

    pub new_high_count: u32,
    pub new_medium_count: u32,
    pub new_low_count: u32,

    pub high_queries: Vec<QueryResult>,
    pub medium_queries: Vec<QueryResult>,
    pub low_queries: Vec<QueryResult>,
    pub info_queries: Vec<QueryResult>,

    pub high_queries_json: String,
    pub medium_queries_json: String,
    pub low_queries_json: String,
    pub info_queries_json: String,

    /// Link into the scan viewer, empty when it could not be built
    pub deep_link: String,

    /// Scan start, formatted as `dd/MM/yy HH:mm`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_start: Option<String>,

    /// Scan end, formatted as `dd/MM/yy HH:mm`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_end: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines_of_code_scanned: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_scanned: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_type: Option<String>,

    /// True only when the whole document was read without a structural failure
    pub is_valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Default for ScanSummary {
    fn default() -> Self {
        Self {
            high_count: 0,
            medium_count: 0,
            low_count: 0,
            info_count: 0,
            new_high_count: 0,
            new_medium_count: 0,
            new_low_count: 0,
            high_queries: Vec::new(),
            medium_queries: Vec::new(),
            low_queries: Vec::new(),
            info_queries: Vec::new(),
            high_queries_json: EMPTY_QUERIES_JSON.to_string(),
            medium_queries_json: EMPTY_QUERIES_JSON.to_string(),
            low_queries_json: EMPTY_QUERIES_JSON.to_string(),
            info_queries_json: EMPTY_QUERIES_JSON.to_string(),
            deep_link: String::new(),
            scan_start: None,
            scan_end: None,
            lines_of_code_scanned: None,
            files_scanned: None,
            scan_type: None,
            is_valid: false,
            error_message: None,
        }
    }
}

impl ScanSummary {
    /// Total results counted for a severity
    pub fn count(&self, severity: Severity) -> u32 {
        match severity {
            Severity::High => self.high_count,
            Severity::Medium => self.medium_count,
            Severity::Low => self.low_count,
            Severity::Info => self.info_count,
        }
    }

    /// New results counted for a severity; Info has no new counter
    pub fn new_count(&self, severity: Severity) -> Option<u32> {
        match severity {
            Severity::High => Some(self.new_high_count),
            Severity::Medium => Some(self.new_medium_count),
            Severity::Low => Some(self.new_low_count),
            Severity::Info => None,
        }
    }

    /// Query results placed under a severity, in document order
    pub fn queries(&self, severity: Severity) -> &[QueryResult] {
        match severity {
            Severity::High => &self.high_queries,
            Severity::Medium => &self.medium_queries,
            Severity::Low => &self.low_queries,
            Severity::Info => &self.info_queries,
        }
    }

    /// Encoded query list for a severity
    pub fn queries_json(&self, severity: Severity) -> &str {
        match severity {
            Severity::High => &self.high_queries_json,
            Severity::Medium => &self.medium_queries_json,
            Severity::Low => &self.low_queries_json,
            Severity::Info => &self.info_queries_json,
        }
    }

    /// Results counted across all severities
    pub fn total_count(&self) -> u32 {
        Severity::ALL
            .iter()
            .fold(0u32, |total, s| total.saturating_add(self.count(*s)))
    }

    /// Count one non-false-positive result. Counters stop at `u32::MAX`.
    pub fn record_result(&mut self, severity: Severity, is_new: bool) {
        let (count, new_count) = match severity {
            Severity::High => (&mut self.high_count, Some(&mut self.new_high_count)),
            Severity::Medium => (&mut self.medium_count, Some(&mut self.new_medium_count)),
            Severity::Low => (&mut self.low_count, Some(&mut self.new_low_count)),
            Severity::Info => (&mut self.info_count, None),
        };

        *count = count.saturating_add(1);
        if let (true, Some(new_count)) = (is_new, new_count) {
            *new_count = new_count.saturating_add(1);
        }
    }

    /// Append a closed query to the list for its severity
    pub fn push_query(&mut self, severity: Severity, query: QueryResult) {
        match severity {
            Severity::High => self.high_queries.push(query),
            Severity::Medium => self.medium_queries.push(query),
            Severity::Low => self.low_queries.push(query),
            Severity::Info => self.info_queries.push(query),
        }
    }

    /// Mark the pass as complete and encode the four query lists
    pub fn finish(&mut self) {
        self.is_valid = true;
        self.error_message = None;
        self.high_queries_json = encode_queries(&self.high_queries);
        self.medium_queries_json = encode_queries(&self.medium_queries);
        self.low_queries_json = encode_queries(&self.low_queries);
        self.info_queries_json = encode_queries(&self.info_queries);
    }

    /// Mark the pass as failed, keeping everything counted so far
    pub fn fail(&mut self, message: impl Into<String>) {
        self.is_valid = false;
        self.error_message = Some(message.into());
    }
}

/// Encode a query list as a JSON array of `{name, severity, count}` objects.
///
/// Falls back to `"[]"` if the list is empty or cannot be encoded.
pub fn encode_queries(queries: &[QueryResult]) -> String {
    if queries.is_empty() {
        return EMPTY_QUERIES_JSON.to_string();
    }

    match serde_json::to_string(queries) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Could not encode query results as JSON: {}", e);
            EMPTY_QUERIES_JSON.to_string()
        }
    }
}
