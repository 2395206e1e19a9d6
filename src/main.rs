//! cxsummary CLI - summarize Checkmarx SAST XML scan reports

use clap::Parser;
use env_logger::Env;

use cxsummary::cli::{self, Cli, Commands, args::GlobalOptions};
use cxsummary::error::Result;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "warn" };
    env_logger::init_from_env(Env::default().default_filter_or(log_level));

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("cxsummary version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Summary { report, thresholds } => cli::summary::run(&opts, &report, &thresholds),
        Commands::Queries { report, severity } => cli::queries::run(&opts, &report, severity),
        Commands::Completion { shell } => cli::completions::run(shell),
    }
}
