//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the run
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// When the output was generated (RFC 3339)
    pub generated_at: String,

    /// CLI version
    pub version: String,

    /// Report file the data was read from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

impl<T> JsonOutput<T> {
    /// Create a new JSON output with metadata
    pub fn new(data: T, report: Option<String>) -> Self {
        Self {
            data,
            meta: Metadata {
                generated_at: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                report,
            },
        }
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(
    data: &T,
    report: Option<&str>,
) -> Result<String, serde_json::Error> {
    let output = JsonOutput::new(data, report.map(String::from));
    serde_json::to_string_pretty(&output)
}
