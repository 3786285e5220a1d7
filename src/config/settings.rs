use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};
use crate::generator::{is_valid_length, DEFAULT_LENGTH, MAX_LENGTH};

/// Vault-directory configuration, loaded from `.passvault.toml`.
///
/// Every field has a sensible default so PassVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Key file name (relative to the vault directory).
    #[serde(default = "default_key_file")]
    pub key_file: String,

    /// Encrypted vault file name (relative to the vault directory).
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// Length of passwords generated by `add` when none is given.
    #[serde(default = "default_password_length")]
    pub password_length: usize,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_key_file() -> String {
    "key.key".to_string()
}

fn default_vault_file() -> String {
    "vault.json".to_string()
}

fn default_password_length() -> usize {
    DEFAULT_LENGTH
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            key_file: default_key_file(),
            vault_file: default_vault_file(),
            password_length: default_password_length(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the vault directory.
    const FILE_NAME: &'static str = ".passvault.toml";

    /// Load settings from `<dir>/.passvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let mut settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        if !is_valid_length(settings.password_length) {
            settings.password_length = DEFAULT_LENGTH;
        }

        Ok(settings)
    }

    /// Full path to the key file, e.g. `dir/key.key`.
    pub fn key_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.key_file)
    }

    /// Full path to the vault file, e.g. `dir/vault.json`.
    pub fn vault_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.vault_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
