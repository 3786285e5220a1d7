//! High-level vault operations used by the CLI.
//!
//! `VaultService` wraps `VaultStore` so the presentation layer can work
//! with simple calls like `service.add_entry("Gmail", "bob", None)`.
//! Every operation reloads the vault from disk, applies its change and
//! (for writes) saves it back before returning.

use std::path::PathBuf;

use tracing::debug;

use super::entry::{Entry, EntrySet};
use super::store::VaultStore;
use crate::crypto::{Cipher, KeyStore};
use crate::errors::{PassVaultError, Result};
use crate::generator::{self, DEFAULT_LENGTH, MAX_LENGTH};

/// Result of a successful `add_entry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedEntry {
    pub service: String,
    /// The stored password, either the caller's or a generated one.
    pub password: String,
    /// `true` if the password was generated.
    pub generated: bool,
    /// Number of entries now stored under the service.
    pub total: usize,
}

/// A service name with the number of entries under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSummary {
    pub name: String,
    pub entries: usize,
}

/// The CRUD layer over one encrypted vault.
#[derive(Debug)]
pub struct VaultService {
    store: VaultStore,

    /// Length of passwords generated when `add_entry` gets none.
    password_length: usize,
}

impl VaultService {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    pub fn new(store: VaultStore) -> Self {
        Self {
            store,
            password_length: DEFAULT_LENGTH,
        }
    }

    /// Set the generated-password length. Zero or a length above
    /// `MAX_LENGTH` keeps the default.
    pub fn with_password_length(mut self, length: usize) -> Self {
        if generator::is_valid_length(length) {
            self.password_length = length;
        }
        self
    }

    /// Ensure the key exists, then make sure the vault file is initialized.
    ///
    /// This is the startup path: the key file is created on first run and
    /// an encrypted empty vault is written if none exists.
    pub fn open(key_store: &KeyStore, vault_path: impl Into<PathBuf>) -> Result<Self> {
        let key = key_store.ensure_key()?;
        let store = VaultStore::new(vault_path, Cipher::new(key));
        store.initialize()?;
        Ok(Self::new(store))
    }

    pub fn store(&self) -> &VaultStore {
        &self.store
    }

    pub fn password_length(&self) -> usize {
        self.password_length
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Add a login to `service`, generating a password if none is given.
    ///
    /// A blank (empty or whitespace-only) password counts as none. The
    /// first entry for a service is stored on its own; later ones turn
    /// the service into an ordered list. If any step fails the file on
    /// disk is left unchanged.
    pub fn add_entry(
        &self,
        service: &str,
        login: &str,
        password: Option<&str>,
    ) -> Result<AddedEntry> {
        let (password, generated) = match password.filter(|p| !p.trim().is_empty()) {
            Some(p) => (p.to_string(), false),
            None => (generator::generate_password(self.password_length), true),
        };

        let mut vault = self.store.load()?;

        let set = EntrySet::add(vault.remove(service), Entry::new(login, password.clone()));
        let total = set.len();
        vault.insert(service.to_string(), set);

        self.store.save(&vault)?;
        debug!(service, total, generated, "added entry");

        Ok(AddedEntry {
            service: service.to_string(),
            password,
            generated,
            total,
        })
    }

    /// Look up every entry stored under `service`, in insertion order.
    pub fn find_entry(&self, service: &str) -> Result<Vec<Entry>> {
        let mut vault = self.store.load()?;
        vault
            .remove(service)
            .map(EntrySet::into_entries)
            .ok_or_else(|| PassVaultError::ServiceNotFound(service.to_string()))
    }

    /// Remove `service` and all of its entries.
    ///
    /// Returns how many entries were removed.
    pub fn delete_entry(&self, service: &str) -> Result<usize> {
        let mut vault = self.store.load()?;
        let removed = vault
            .remove(service)
            .ok_or_else(|| PassVaultError::ServiceNotFound(service.to_string()))?;

        self.store.save(&vault)?;
        debug!(service, removed = removed.len(), "deleted service");

        Ok(removed.len())
    }

    /// List every service (sorted by name) with its entry count.
    pub fn list_services(&self) -> Result<Vec<ServiceSummary>> {
        let vault = self.store.load()?;
        Ok(vault
            .iter()
            .map(|(name, set)| ServiceSummary {
                name: name.clone(),
                entries: set.len(),
            })
            .collect())
    }

    /// Generate a password without touching the vault.
    pub fn generate_password(&self, length: usize) -> String {
        generator::generate_password(length)
    }
}
