//! `passvault delete` — remove a service and all of its logins.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_service, prompt_error, Cli};
use crate::errors::Result;

/// Execute the `delete` command.
pub fn execute(cli: &Cli, service: &str, force: bool) -> Result<()> {
    let vault = open_service(cli)?;

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete all logins for '{service}'?"))
            .default(false)
            .interact()
            .map_err(prompt_error("confirm"))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let removed = vault.delete_entry(service)?;
    output::success(&format!("Deleted {removed} login(s) for '{service}'"));

    Ok(())
}
