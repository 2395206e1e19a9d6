//! Global CLI options shared across all commands
//!
//! This module provides a centralized struct for global CLI options, so
//! command handlers take one argument instead of one per flag.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For most options, the precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file defaults are resolved by the
/// command handlers.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json); `None` falls back to the config file
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.cxsummary/config.yaml)
    pub config: Option<String>,

    /// Server URL override (bypasses config file)
    pub server_url: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            server_url: cli.server_url.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get server URL override as `Option<&str>`.
    pub fn server_url_ref(&self) -> Option<&str> {
        self.server_url.as_deref()
    }
}
