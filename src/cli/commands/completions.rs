//! `passvault completions` — generate shell completion scripts.
//!
//! Usage:
//!   passvault completions bash > ~/.local/share/bash-completion/completions/passvault
//!   passvault completions zsh

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command, writing the script to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    write_script(shell, &mut io::stdout())
}

fn write_script(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    Ok(())
}
