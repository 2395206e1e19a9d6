//! Vulnerability threshold arguments

use clap::Args;

use crate::models::{ScanSummary, Severity};

/// Maximum allowed result counts per severity.
///
/// A threshold is exceeded when the count is strictly greater than it.
#[derive(Args, Debug, Default, Clone)]
pub struct ThresholdArgs {
    /// Fail if more than this many High results are found
    #[arg(long, value_name = "COUNT")]
    pub high_threshold: Option<u32>,

    /// Fail if more than this many Medium results are found
    #[arg(long, value_name = "COUNT")]
    pub medium_threshold: Option<u32>,

    /// Fail if more than this many Low results are found
    #[arg(long, value_name = "COUNT")]
    pub low_threshold: Option<u32>,
}

/// A severity whose count went over its threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdViolation {
    pub severity: Severity,
    pub count: u32,
    pub threshold: u32,
}

impl std::fmt::Display for ThresholdViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} results {} exceed threshold {}",
            self.severity, self.count, self.threshold
        )
    }
}

impl ThresholdArgs {
    pub fn is_empty(&self) -> bool {
        self.high_threshold.is_none()
            && self.medium_threshold.is_none()
            && self.low_threshold.is_none()
    }

    fn threshold(&self, severity: Severity) -> Option<u32> {
        match severity {
            Severity::High => self.high_threshold,
            Severity::Medium => self.medium_threshold,
            Severity::Low => self.low_threshold,
            Severity::Info => None,
        }
    }

    /// Severities whose counts exceed their configured threshold
    pub fn violations(&self, summary: &ScanSummary) -> Vec<ThresholdViolation> {
        Severity::ALL
            .iter()
            .filter_map(|s| {
                let threshold = self.threshold(*s)?;
                let count = summary.count(*s);
                (count > threshold).then_some(ThresholdViolation {
                    severity: *s,
                    count,
                    threshold,
                })
            })
            .collect()
    }
}
