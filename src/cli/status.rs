//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::{Config, normalize_server_url};
use crate::error::{ConfigError, Error, Result};

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "cxsummary Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!("Config file: {}", config_path.display().to_string().cyan());

    let config = match Config::load_from(config_path) {
        Ok(config) => Some(config),
        Err(Error::Config(ConfigError::NotFound)) => {
            println!("{} Configuration file not found", "✗".red());
            println!("  → Run 'cxsummary init' to configure");
            None
        }
        Err(e) => return Err(e),
    };

    println!();

    if let Some(url) = opts.server_url_ref() {
        println!(
            "{} Server URL: {} {}",
            "✓".green(),
            normalize_server_url(url),
            "(via --server-url)".dimmed()
        );
    } else if let Some(url) = config.as_ref().and_then(|c| c.server_url.as_deref()) {
        println!("{} Server URL: {}", "✓".green(), url);
    } else {
        println!("{} Server URL not configured", "✗".red());
        println!("  → Run 'cxsummary init' or pass --server-url");
    }

    let format = opts
        .format
        .map(|f| format!("{:?}", f).to_lowercase())
        .or_else(|| config.as_ref().and_then(|c| c.preferences.format.clone()));
    match format {
        Some(format) => println!("{} Output format: {}", "✓".green(), format),
        None => println!("{} Output format: pretty (default)", "○".dimmed()),
    }

    Ok(())
}
