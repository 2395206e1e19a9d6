//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod context;
pub mod init;
pub mod queries;
pub mod status;
pub mod summary;

pub use args::{OutputFormat, ThresholdArgs};
pub use context::CommandContext;

use crate::models::Severity;

/// cxsummary - summarize Checkmarx SAST XML scan reports
#[derive(Parser, Debug)]
#[command(name = "cxsummary")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "CXSUMMARY_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "CXSUMMARY_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Checkmarx server URL used for deep links (overrides config)
    #[arg(long, global = true, env = "CXSUMMARY_SERVER_URL", hide_env = true)]
    pub server_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "CXSUMMARY_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize cxsummary configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Summarize a scan report: counts per severity, scan metadata, deep link
    #[command(after_help = "EXAMPLES:\n  \
            cxsummary summary CxSASTReport.xml                     # Pretty overview\n  \
            cxsummary summary report.xml --format json             # JSON for scripting\n  \
            cxsummary summary report.xml --high-threshold 0        # Fail the build on any High")]
    Summary {
        /// Path to the XML report
        report: PathBuf,

        #[command(flatten)]
        thresholds: ThresholdArgs,
    },

    /// List aggregated query results from a scan report
    #[command(after_help = "EXAMPLES:\n  \
            cxsummary queries report.xml                  # All queries\n  \
            cxsummary queries report.xml --severity high  # High severity only")]
    Queries {
        /// Path to the XML report
        report: PathBuf,

        /// Only show queries of this severity
        #[arg(long, short = 's', value_enum)]
        severity: Option<Severity>,
    },

    /// Generate shell completions
    #[command(after_help = "\
Static completions:
  bash:   cxsummary completion bash > /etc/bash_completion.d/cxsummary
  zsh:    cxsummary completion zsh > \"${fpath[1]}/_cxsummary\"
  fish:   cxsummary completion fish > ~/.config/fish/completions/cxsummary.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
