//! Shell completion generation

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;
use crate::error::Result;

/// Write static completions for `shell` to `out`
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    out.flush()?;
    Ok(())
}

/// Run the completion command, printing to stdout
pub fn run(shell: Shell) -> Result<()> {
    write_completions(shell, &mut std::io::stdout())
}
