//! Encrypted vault persistence.
//!
//! `VaultStore` owns the vault file on disk.  The whole mapping is
//! decrypted on every `load` and re-encrypted on every `save`; nothing is
//! cached between calls, so edits made by another session are always
//! picked up on the next operation.
//!
//! On disk the file is opaque: `[ 12-byte nonce | AES-GCM(JSON) + tag ]`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zeroize::Zeroizing;

use super::entry::Vault;
use crate::crypto::Cipher;
use crate::errors::{PassVaultError, Result};

/// Handle to one encrypted vault file.
#[derive(Debug)]
pub struct VaultStore {
    /// Path to the vault file on disk.
    path: PathBuf,

    /// Cipher bound to the vault key.
    cipher: Cipher,
}

impl VaultStore {
    pub fn new(path: impl Into<PathBuf>, cipher: Cipher) -> Self {
        Self {
            path: path.into(),
            cipher,
        }
    }

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write an encrypted empty vault if no vault file exists yet.
    ///
    /// Safe to call on every startup: an existing file is never touched.
    /// Returns `true` if a new file was created.
    pub fn initialize(&self) -> Result<bool> {
        if self.path.exists() {
            debug!(path = %self.path.display(), "vault file already present");
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        self.save(&Vault::new())?;
        info!(path = %self.path.display(), "created empty vault");
        Ok(true)
    }

    /// Read, decrypt and parse the whole vault file.
    ///
    /// Any decryption or parse failure is `VaultCorrupt`; a broken vault
    /// is never replaced by an empty one.
    pub fn load(&self) -> Result<Vault> {
        if !self.path.exists() {
            return Err(PassVaultError::VaultNotFound(self.path.clone()));
        }

        let data = fs::read(&self.path)?;

        let plaintext = self.cipher.decrypt(&data).map_err(|e| match e {
            PassVaultError::DecryptionFailed => {
                PassVaultError::VaultCorrupt("authentication failed".into())
            }
            other => other,
        })?;

        let vault: Vault = serde_json::from_slice(&plaintext)
            .map_err(|e| PassVaultError::VaultCorrupt(format!("invalid vault payload: {e}")))?;

        debug!(services = vault.len(), "loaded vault");
        Ok(vault)
    }

    /// Serialize, encrypt and write the vault to disk atomically.
    ///
    /// The ciphertext goes to a temp file in the same directory, which is
    /// then renamed over the target, so readers never see a half-written
    /// file.
    pub fn save(&self, vault: &Vault) -> Result<()> {
        let plaintext = Zeroizing::new(
            serde_json::to_vec(vault)
                .map_err(|e| PassVaultError::SerializationError(format!("vault: {e}")))?,
        );

        let ciphertext = self.cipher.encrypt(&plaintext)?;

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        ));

        fs::write(&tmp_path, &ciphertext)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        debug!(services = vault.len(), bytes = ciphertext.len(), "saved vault");
        Ok(())
    }
}
