//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::config::{Config, Preferences, normalize_server_url};
use crate::error::Result;

const FORMATS: [&str; 3] = ["pretty", "table", "json"];

/// Run the init command
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to cxsummary!".bold().green());
    println!("Let's point cxsummary at your Checkmarx server.\n");

    let existing = Config::load_at(opts.config_ref()).ok();
    let default_url = opts
        .server_url
        .clone()
        .or_else(|| existing.as_ref().and_then(|c| c.server_url.clone()));

    let theme = ColorfulTheme::default();
    let mut prompt = Input::<String>::with_theme(&theme)
        .with_prompt("Checkmarx server URL (e.g. https://checkmarx.example.com)")
        .validate_with(|input: &String| validate_server_url(input));
    if let Some(url) = default_url {
        prompt = prompt.default(url);
    }
    let server_url = normalize_server_url(&prompt.interact_text()?);

    let format_idx = Select::with_theme(&theme)
        .with_prompt("Default output format")
        .items(&FORMATS)
        .default(0)
        .interact()?;

    let config = Config {
        server_url: Some(server_url),
        preferences: Preferences {
            format: Some(FORMATS[format_idx].to_string()),
        },
    };
    config.save_at(opts.config_ref())?;

    let path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
    println!("\nTry: cxsummary summary <REPORT.xml>");

    Ok(())
}

/// Accept only absolute http(s) URLs
fn validate_server_url(input: &str) -> std::result::Result<(), String> {
    let url = normalize_server_url(input);
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| "URL must start with http:// or https://".to_string())?;

    if rest.is_empty() {
        return Err("URL must include a host".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_server_url() {
        assert!(validate_server_url("https://cx.example.com").is_ok());
        assert!(validate_server_url("http://10.0.0.5:8080/").is_ok());
        assert!(validate_server_url("cx.example.com").is_err());
        assert!(validate_server_url("https://").is_err());
        assert!(validate_server_url("ftp://cx").is_err());
    }
}
