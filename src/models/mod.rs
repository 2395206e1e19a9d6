//! Report data models and their display counterparts

pub mod display;
pub mod severity;
pub mod summary;

pub use display::{QueryDisplay, SeverityRowDisplay, SummaryOverview};
pub use severity::Severity;
pub use summary::{EMPTY_QUERIES_JSON, QueryResult, ScanSummary, encode_queries};
