//! AES-256-GCM authenticated encryption.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce and
//! prepends it to the ciphertext.  `decrypt` splits the nonce back out
//! before decrypting.
//!
//! Layout of the returned byte buffer:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use zeroize::Zeroizing;

use super::keys::VaultKey;
use crate::errors::{PassVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Encrypt `plaintext` with a 32-byte `key`.
///
/// Returns the nonce prepended to the ciphertext (nonce || ciphertext).
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| PassVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| PassVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Prepend the nonce so the caller only needs to store one blob.
    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt data that was produced by `encrypt`.
///
/// Any failure (short input, wrong key size, wrong key, tampered bytes)
/// is reported as `DecryptionFailed`.
pub fn decrypt(key: &[u8], ciphertext_with_nonce: &[u8]) -> Result<Vec<u8>> {
    if ciphertext_with_nonce.len() < NONCE_LEN {
        return Err(PassVaultError::DecryptionFailed);
    }

    let (nonce_bytes, ciphertext) = ciphertext_with_nonce.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| PassVaultError::DecryptionFailed)?;

    // Decrypt and verify the auth tag.
    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| PassVaultError::DecryptionFailed)
}

/// An authenticated cipher bound to one vault key.
///
/// The key is kept as raw bytes and only turned into an AES instance per
/// call, so an invalid key surfaces as an encrypt/decrypt error rather
/// than at construction time.
pub struct Cipher {
    key: VaultKey,
}

impl Cipher {
    pub fn new(key: VaultKey) -> Self {
        Self { key }
    }

    /// Encrypt an opaque payload under this cipher's key.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        encrypt(self.key.as_bytes(), plaintext)
    }

    /// Decrypt and authenticate a payload produced by `encrypt`.
    ///
    /// The plaintext is wiped from memory once the caller drops it.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        decrypt(self.key.as_bytes(), ciphertext).map(Zeroizing::new)
    }
}

impl std::fmt::Debug for Cipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cipher").field("key", &self.key).finish()
    }
}
