//! `passvault add` — store a login for a service.

use std::io::{self, IsTerminal, Read};

use crate::cli::output;
use crate::cli::{open_service, prompt_error, Cli};
use crate::errors::Result;

/// Execute the `add` command.
pub fn execute(cli: &Cli, service: &str, login: &str, password: Option<&str>) -> Result<()> {
    // A missing key or a corrupt vault must fail before a secret is typed.
    let vault = open_service(cli)?;
    vault.store().load()?;

    // Determine the password from one of three sources.
    let password = if let Some(p) = password {
        // Source 1: Inline value on the command line.
        if !p.trim().is_empty() {
            output::warning("Password provided on command line — it may appear in shell history.");
        }
        p.to_string()
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf.trim_end_matches(&['\r', '\n'][..]).to_string()
    } else {
        // Source 3: Interactive hidden prompt; empty means "generate".
        dialoguer::Password::new()
            .with_prompt("Password (leave empty to generate)")
            .allow_empty_password(true)
            .interact()
            .map_err(prompt_error("password"))?
    };

    let added = vault.add_entry(service, login, Some(&password))?;

    if added.generated {
        output::password("Generated password:", &added.password);
    } else {
        output::password("Password:", &added.password);
    }
    output::success(&format!(
        "Entry for '{}' added ({} login(s) total)",
        added.service, added.total
    ));

    Ok(())
}
