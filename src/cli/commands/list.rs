//! `passvault list` — display all services in a table.

use crate::cli::output;
use crate::cli::{open_service, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let vault = open_service(cli)?;
    let services = vault.list_services()?;

    output::info(&format!("{} service(s)", services.len()));
    output::print_services_table(&services);

    Ok(())
}
