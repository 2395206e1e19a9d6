//! Severity levels used by SAST reports

use std::fmt;

use serde::{Deserialize, Serialize};

/// Finding severity as encoded by the `SeverityIndex` report attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// All severities, highest first
    pub const ALL: [Severity; 4] = [
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Info,
    ];

    /// Map a `SeverityIndex` token to its severity.
    ///
    /// Returns `None` for anything outside the four known tokens.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "3" => Some(Severity::High),
            "2" => Some(Severity::Medium),
            "1" => Some(Severity::Low),
            "0" => Some(Severity::Info),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Info => "Info",
        };
        f.write_str(label)
    }
}
