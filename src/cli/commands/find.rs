//! `passvault find` — show every login stored for a service.

use crate::cli::output;
use crate::cli::{open_service, Cli};
use crate::errors::Result;

/// Execute the `find` command.
pub fn execute(cli: &Cli, service: &str) -> Result<()> {
    let vault = open_service(cli)?;
    let entries = vault.find_entry(service)?;

    output::info(&format!("{service} — {} login(s)", entries.len()));
    output::print_entries_table(&entries);

    Ok(())
}
