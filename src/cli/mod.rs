//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::crypto::{Cipher, KeyStore};
use crate::errors::{PassVaultError, Result};
use crate::vault::{VaultService, VaultStore};

/// PassVault CLI: local encrypted password vault.
#[derive(Parser)]
#[command(name = "passvault", about = "Local encrypted password vault", version)]
pub struct Cli {
    /// Command to run (default: interactive menu)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the key, vault and config files
    #[arg(short, long, default_value = ".", global = true)]
    pub dir: String,

    /// Print diagnostic logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Interactive menu (add, find, delete, generate)
    Menu,

    /// Add a login for a service
    Add {
        /// Service name (e.g. Gmail)
        service: String,
        /// Login for the service
        login: String,
        /// Password (omit for a prompt; leave empty to generate one)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Show every login stored for a service
    Find {
        /// Service name
        service: String,
    },

    /// Delete a service and all of its logins
    Delete {
        /// Service name
        service: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List all services
    List,

    /// Generate a random password
    Generate {
        /// Password length (default: 10)
        #[arg(allow_hyphen_values = true)]
        length: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve the vault directory from the CLI arguments.
pub fn vault_dir(cli: &Cli) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(&cli.dir))
}

/// Load settings, ensure the key and vault files exist, and build the service.
///
/// Announces first-run creation of the key and the empty vault.
pub fn open_service(cli: &Cli) -> Result<VaultService> {
    let dir = vault_dir(cli)?;
    let settings = Settings::load(&dir)?;

    let key_store = KeyStore::new(settings.key_path(&dir));
    let had_key = key_store.exists();
    let key = key_store.ensure_key()?;
    if !had_key {
        output::info(&format!(
            "Created new key at {}",
            key_store.path().display()
        ));
        output::tip("Back up this file: without it the vault cannot be decrypted.");
    }

    let store = VaultStore::new(settings.vault_path(&dir), Cipher::new(key));
    if store.initialize()? {
        output::info(&format!(
            "Created empty vault at {}",
            store.path().display()
        ));
    }

    Ok(VaultService::new(store).with_password_length(settings.password_length))
}

/// Map a dialoguer prompt failure into a command error.
pub(crate) fn prompt_error(what: &str) -> impl FnOnce(dialoguer::Error) -> PassVaultError + '_ {
    move |e| PassVaultError::CommandFailed(format!("{what} prompt: {e}"))
}
