//! Command execution context
//!
//! Resolves config, output format and the report parser once, so report
//! commands don't repeat the lookup boilerplate.

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};
use crate::report::ReportParser;

/// Context for report commands containing config, parser, and runtime options.
pub struct CommandContext {
    /// Loaded configuration, or defaults when no config file exists
    pub config: Config,
    /// Parser bound to the resolved server URL
    pub parser: ReportParser,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is fine as long as `--server-url` (or its env var)
    /// supplies the server. An unreadable config file is an error.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = match Config::load_at(opts.config_ref()) {
            Ok(config) => config,
            Err(Error::Config(ConfigError::NotFound)) => {
                debug!("No config file found, using defaults");
                Config::default()
            }
            Err(e) => return Err(e),
        };

        let server_url = config.resolve_server_url(opts.server_url_ref())?;
        debug!("Using server URL {}", server_url);

        let format = resolve_format(opts.format, &config);

        Ok(Self {
            parser: ReportParser::new(server_url),
            config,
            format,
        })
    }
}

/// Flag/env format wins, then the config preference, then the default
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| {
        config
            .preferences
            .format
            .as_deref()
            .and_then(OutputFormat::from_config)
    })
    .unwrap_or_default()
}
