//! Key file lifecycle for PassVault.
//!
//! The key file holds the raw bytes of the vault key with no header.
//! It is created exactly once, on first run, and read verbatim after that.
//! An existing empty file counts as "absent" and is filled with a new key.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use aes_gcm::aead::{KeyInit, OsRng};
use aes_gcm::Aes256Gcm;
use tracing::{debug, info};

use super::keys::VaultKey;
use crate::errors::{PassVaultError, Result};

/// Owns the on-disk key file.
#[derive(Debug, Clone)]
pub struct KeyStore {
    path: PathBuf,
}

impl KeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the key file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return `true` if a non-empty key file is present.
    pub fn exists(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.len() > 0)
    }

    /// Load the vault key, generating and persisting one if needed.
    ///
    /// Never overwrites a non-empty key file. The loaded bytes are not
    /// checked for length or format.
    pub fn ensure_key(&self) -> Result<VaultKey> {
        match fs::metadata(&self.path) {
            Ok(meta) if meta.len() > 0 => self.load(),
            Ok(_) => self.fill_empty(),
            Err(e) if e.kind() == ErrorKind::NotFound => self.create(),
            Err(e) => Err(PassVaultError::KeyUnavailable(format!(
                "cannot stat {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn load(&self) -> Result<VaultKey> {
        let bytes = fs::read(&self.path).map_err(|e| {
            PassVaultError::KeyUnavailable(format!("cannot read {}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), "loaded existing key file");
        Ok(VaultKey::new(bytes))
    }

    /// Create the key file. If another process created it first, its key
    /// wins and is loaded instead.
    fn create(&self) -> Result<VaultKey> {
        // Ensure the parent directory exists.
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    PassVaultError::KeyUnavailable(format!("cannot create key directory: {e}"))
                })?;
            }
        }

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let file = match options.open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %self.path.display(), "key file appeared before create");
                return self.load();
            }
            Err(e) => {
                return Err(PassVaultError::KeyUnavailable(format!(
                    "failed to create key file: {e}"
                )))
            }
        };

        self.write_new_key(file)
    }

    /// Fill an existing zero-length key file with a new key.
    fn fill_empty(&self) -> Result<VaultKey> {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| {
                PassVaultError::KeyUnavailable(format!("failed to open key file: {e}"))
            })?;

        // On Unix, restrict permissions to owner-only read/write.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&self.path, perms).map_err(|e| {
                PassVaultError::KeyUnavailable(format!("failed to set key file permissions: {e}"))
            })?;
        }

        self.write_new_key(file)
    }

    fn write_new_key(&self, mut file: File) -> Result<VaultKey> {
        let generated = Aes256Gcm::generate_key(&mut OsRng);
        let key = VaultKey::new(generated.to_vec());

        file.write_all(key.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| {
                PassVaultError::KeyUnavailable(format!("failed to write key file: {e}"))
            })?;

        info!(path = %self.path.display(), "generated new key file");
        Ok(key)
    }
}
