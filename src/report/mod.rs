//! Streaming parser for Checkmarx SAST XML reports
//!
//! A report is read in a single forward pass. Element events from the XML
//! reader drive [`ReportAggregator`], which counts results per severity and
//! per query. Structural failures (malformed or truncated XML, a root other
//! than `CxXMLResults`, I/O errors) end the pass and are recorded in the returned [`ScanSummary`]; missing or unreadable
//! attributes are logged and skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, error};

pub mod aggregate;
pub mod deep_link;
pub mod events;
pub mod timestamps;

pub use aggregate::ReportAggregator;
pub use events::{Attributes, ElementHandler};

use crate::models::ScanSummary;

/// Parses SAST XML reports into scan summaries
#[derive(Debug, Clone)]
pub struct ReportParser {
    server_url: String,
}

impl ReportParser {
    /// Create a parser that builds deep links against `server_url`
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Parse a report from any buffered reader.
    ///
    /// Never fails; check [`ScanSummary::is_valid`] and
    /// [`ScanSummary::error_message`] on the result.
    pub fn parse<R: BufRead>(&self, input: R) -> ScanSummary {
        let mut aggregator = ReportAggregator::new(&self.server_url);

        let pass = events::drive(input, &mut aggregator).and_then(|()| aggregator.check_root());
        match pass {
            Ok(()) => {
                let mut summary = aggregator.into_summary();
                summary.finish();
                debug!("Parsed report: {} results", summary.total_count());
                summary
            }
            Err(e) => {
                error!("{}", e);
                let mut summary = aggregator.into_summary();
                summary.fail(e.to_string());
                summary
            }
        }
    }

    /// Parse a report file. A file that cannot be opened yields an invalid summary.
    pub fn parse_file(&self, path: &Path) -> ScanSummary {
        debug!("Reading report {}", path.display());

        match File::open(path) {
            Ok(file) => self.parse(BufReader::new(file)),
            Err(e) => {
                let err = crate::error::ReportError::from(e);
                error!("{}: {}", path.display(), err);
                let mut summary = ScanSummary::default();
                summary.fail(err.to_string());
                summary
            }
        }
    }
}
