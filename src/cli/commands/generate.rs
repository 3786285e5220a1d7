//! `passvault generate` — print a random password.
//!
//! Needs neither the key nor the vault.

use crate::cli::output;
use crate::errors::Result;
use crate::generator::{generate_password, parse_length};

/// Execute the `generate` command.
///
/// An unusable `length` silently falls back to the default.
pub fn execute(length: Option<&str>) -> Result<()> {
    let password = generate_password(parse_length(length));
    output::password("Generated password:", &password);
    Ok(())
}
