//! `passvault menu` — interactive add / find / delete / generate loop.
//!
//! This is also what runs when no subcommand is given. The vault is
//! reloaded from disk for every action, so edits made meanwhile by
//! another process are picked up.

use dialoguer::{Confirm, Input, Password, Select};

use crate::cli::output;
use crate::cli::{open_service, prompt_error, Cli};
use crate::errors::Result;
use crate::generator::{parse_length, DEFAULT_LENGTH};
use crate::vault::VaultService;

/// Menu items, in display order.
const ACTIONS: [&str; 5] = [
    "Add entry",
    "Find entry",
    "Delete entry",
    "Generate password",
    "Exit",
];

/// Execute the interactive menu.
pub fn execute(cli: &Cli) -> Result<()> {
    let vault = open_service(cli)?;

    loop {
        let choice = Select::new()
            .with_prompt("Choose an action")
            .items(&ACTIONS)
            .default(0)
            .interact_opt()
            .map_err(prompt_error("menu"))?;

        // Esc / q counts as exit.
        let result = match choice {
            Some(0) => add(&vault),
            Some(1) => find(&vault),
            Some(2) => delete(&vault),
            Some(3) => generate(&vault),
            _ => break,
        };

        // A failed action is reported, and the menu keeps running.
        if let Err(e) = result {
            if e.is_not_found() {
                output::warning(&e.to_string());
            } else {
                output::error(&e.to_string());
            }
        }
    }

    output::info("Goodbye!");
    Ok(())
}

fn prompt_text(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(prompt_error("input"))?;
    Ok(value.trim().to_string())
}

fn add(vault: &VaultService) -> Result<()> {
    let service = prompt_text("Service")?;
    let login = prompt_text("Login")?;
    let password = Password::new()
        .with_prompt("Password (leave empty to generate)")
        .allow_empty_password(true)
        .interact()
        .map_err(prompt_error("password"))?;

    let added = vault.add_entry(&service, &login, Some(&password))?;
    output::password("Password:", &added.password);
    output::success(&format!("Entry for '{}' added", added.service));
    Ok(())
}

fn find(vault: &VaultService) -> Result<()> {
    let service = prompt_text("Service")?;
    let entries = vault.find_entry(&service)?;
    output::print_entries_table(&entries);
    Ok(())
}

fn delete(vault: &VaultService) -> Result<()> {
    let service = prompt_text("Service to delete")?;
    let confirmed = Confirm::new()
        .with_prompt(format!("Delete all logins for '{service}'?"))
        .default(false)
        .interact()
        .map_err(prompt_error("confirm"))?;

    if !confirmed {
        output::info("Cancelled.");
        return Ok(());
    }

    vault.delete_entry(&service)?;
    output::success(&format!("All logins for '{service}' deleted"));
    Ok(())
}

fn generate(vault: &VaultService) -> Result<()> {
    let length: String = Input::new()
        .with_prompt(format!("Password length (default {DEFAULT_LENGTH})"))
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error("input"))?;

    let password = vault.generate_password(parse_length(Some(&length)));
    output::password("Generated password:", &password);
    Ok(())
}
