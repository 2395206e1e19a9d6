//! Error types for the cxsummary CLI

use thiserror::Error;

/// Result type alias for cxsummary operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Vulnerability threshold exceeded: {0}")]
    Threshold(String),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Structural failures that abort a report parse pass
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Malformed XML report: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed attribute in XML report: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Invalid text encoding in XML report: {0}")]
    Encoding(String),

    #[error("Failed to read XML report: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML report has no root element")]
    NoRootElement,

    #[error("XML report has more than one root element")]
    MultipleRoots,

    #[error("Content is not allowed outside the root element of the XML report")]
    ContentOutsideRoot,

    #[error("XML report ended with {open} unclosed element(s)")]
    UnexpectedEof { open: usize },

    #[error("Not a SAST XML report: expected root element \"CxXMLResults\", found \"{0}\"")]
    UnexpectedRoot(String),
}

impl From<std::str::Utf8Error> for ReportError {
    fn from(err: std::str::Utf8Error) -> Self {
        ReportError::Encoding(err.to_string())
    }
}

/// Scan start/duration fragments that could not be turned into a time window
#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("\"{0}\" attribute is missing")]
    Missing(&'static str),

    #[error("Invalid scan start {value:?}: {source}")]
    InvalidStart {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Invalid scan duration {0:?}, expected HHh:MMm:SSs")]
    InvalidDuration(String),

    #[error("Scan end is out of range")]
    OutOfRange,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `cxsummary init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error(
        "Server URL not configured. Run `cxsummary init` or pass --server-url <URL>."
    )]
    MissingServerUrl,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
