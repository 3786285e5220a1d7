use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Key errors ---
    #[error("Encryption key unavailable: {0}")]
    KeyUnavailable(String),

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong key or tampered data")]
    DecryptionFailed,

    // --- Vault errors ---
    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Vault is corrupt or was encrypted with a different key: {0}")]
    VaultCorrupt(String),

    #[error("Service '{0}' not found")]
    ServiceNotFound(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

impl PassVaultError {
    /// `true` for the "service not found" negative result, which the
    /// presentation layer reports as a normal outcome rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ServiceNotFound(_))
    }
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
