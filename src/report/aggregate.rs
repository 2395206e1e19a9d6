//! Aggregation state machine driven by report element events

use std::mem;

use log::{debug, error};

use super::deep_link;
use super::events::{Attributes, ElementHandler};
use super::timestamps;
use crate::error::ReportError;
use crate::models::{QueryResult, ScanSummary, Severity};

const ROOT_ELEMENT: &str = "CxXMLResults";

const MISSING_SEVERITY_HINT: &str =
    "Make sure you are working with Checkmarx server version 7.1.6 HF3 or above.";

/// Report elements the aggregator reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
    Root,
    Query,
    Result,
    Other,
}

impl Element {
    fn from_name(name: &str) -> Self {
        match name {
            ROOT_ELEMENT => Element::Root,
            "Query" => Element::Query,
            "Result" => Element::Result,
            _ => Element::Other,
        }
    }
}

/// Query currently being counted
#[derive(Debug, Default)]
struct QueryFrame {
    name: Option<String>,
    severity: Option<String>,
    results: u32,
}

#[derive(Debug, Default)]
enum Frame {
    #[default]
    Idle,
    InQuery(QueryFrame),
}

/// Builds a [`ScanSummary`] from one pass over a report.
///
/// Each aggregator owns its summary; use a fresh one per document.
#[derive(Debug)]
pub struct ReportAggregator<'a> {
    server_url: &'a str,
    summary: ScanSummary,
    frame: Frame,
    root: Option<String>,
}

impl<'a> ReportAggregator<'a> {
    pub fn new(server_url: &'a str) -> Self {
        Self {
            server_url,
            summary: ScanSummary::default(),
            frame: Frame::Idle,
            root: None,
        }
    }

    /// Summary gathered so far
    pub fn summary(&self) -> &ScanSummary {
        &self.summary
    }

    /// Fail unless the document's root element is `CxXMLResults`
    pub fn check_root(&self) -> Result<(), ReportError> {
        match self.root.as_deref() {
            Some(ROOT_ELEMENT) => Ok(()),
            Some(other) => Err(ReportError::UnexpectedRoot(other.to_string())),
            None => Err(ReportError::NoRootElement),
        }
    }

    /// Give up the summary, ending the pass
    pub fn into_summary(self) -> ScanSummary {
        self.summary
    }

    fn on_root(&mut self, attributes: &Attributes) {
        self.summary.deep_link = deep_link::construct(attributes.get("DeepLink"), self.server_url);

        match timestamps::reconstruct(attributes.get("ScanStart"), attributes.get("ScanTime")) {
            Ok(window) => {
                self.summary.scan_start = Some(window.display_start());
                self.summary.scan_end = Some(window.display_end());
            }
            Err(e) => {
                error!(
                    "Scan dates in wrong format. Could not parse scan start and end dates and scan time: {}",
                    e
                );
            }
        }

        self.summary.lines_of_code_scanned = attributes.get("LinesOfCodeScanned").map(String::from);
        self.summary.files_scanned = attributes.get("FilesScanned").map(String::from);
        self.summary.scan_type = attributes.get("ScanType").map(String::from);
    }

    fn on_query_start(&mut self, attributes: &Attributes) {
        let name = attributes.get("name").map(String::from);
        if name.is_none() {
            error!("\"name\" attribute was not found in element \"Query\" in XML report");
        }

        let severity = attributes.get("SeverityIndex").map(String::from);
        if severity.is_none() {
            error!(
                "\"SeverityIndex\" attribute was not found in element \"Query\" in XML report. {}",
                MISSING_SEVERITY_HINT
            );
        }

        if let Frame::InQuery(open) = &self.frame {
            debug!(
                "Query {:?} opened inside query {:?}; replacing the open query",
                name, open.name
            );
        }

        self.frame = Frame::InQuery(QueryFrame {
            name,
            severity,
            results: 0,
        });
    }

    fn on_result(&mut self, attributes: &Attributes) {
        if attributes.get("FalsePositive") == Some("True") {
            return;
        }

        match &mut self.frame {
            Frame::InQuery(frame) => frame.results = frame.results.saturating_add(1),
            Frame::Idle => debug!("Result element found outside of any Query"),
        }

        let Some(token) = attributes.get("SeverityIndex") else {
            error!(
                "\"SeverityIndex\" attribute was not found in element \"Result\" in XML report. {}",
                MISSING_SEVERITY_HINT
            );
            return;
        };

        match Severity::from_token(token) {
            Some(severity) => {
                let is_new = attributes.get("Status") == Some("New");
                self.summary.record_result(severity, is_new);
            }
            None => error!("Encountered a result with unknown severity: {}", token),
        }
    }

    fn on_query_end(&mut self) {
        let Frame::InQuery(frame) = mem::take(&mut self.frame) else {
            debug!("Query end found with no open query");
            return;
        };

        let query = QueryResult {
            name: frame.name.unwrap_or_default(),
            severity: frame.severity,
            count: frame.results,
        };

        match query.severity.as_deref().and_then(Severity::from_token) {
            Some(severity) => self.summary.push_query(severity, query),
            None => error!(
                "Encountered a result query with unknown severity: {:?}",
                query.severity
            ),
        }
    }
}

impl ElementHandler for ReportAggregator<'_> {
    fn on_element_start(&mut self, name: &str, attributes: &Attributes) {
        if self.root.is_none() {
            self.root = Some(name.to_string());
        }

        match Element::from_name(name) {
            Element::Root => self.on_root(attributes),
            Element::Query => self.on_query_start(attributes),
            Element::Result => self.on_result(attributes),
            Element::Other => {}
        }
    }

    fn on_element_end(&mut self, name: &str) {
        if Element::from_name(name) == Element::Query {
            self.on_query_end();
        }
    }
}
