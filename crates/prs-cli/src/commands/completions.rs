//! `prs completions` command - Generate shell completions.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};

use super::Cli;

/// Run the completions command.
#[allow(clippy::unnecessary_wraps)]
pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "prs", &mut std::io::stdout());
    Ok(())
}
