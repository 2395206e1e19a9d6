//! Display model implementations for table and JSON output
//!
//! Display models transform parsed report data into CLI-friendly formats
//! with appropriate column names and serialization.

mod common;
mod query;
mod summary;

pub use query::QueryDisplay;
pub use summary::{SeverityRowDisplay, SummaryOverview};
