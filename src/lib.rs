//! Summaries of Checkmarx SAST XML scan reports
//!
//! [`report::ReportParser`] streams a report once and returns a
//! [`models::ScanSummary`] with per-severity counts, per-query result lists,
//! scan metadata and a deep link into the Checkmarx viewer.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod report;

pub use models::{QueryResult, ScanSummary, Severity};
pub use report::ReportParser;
