//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - The in-memory vault key wrapper (`keys`)
//! - Key file lifecycle: load or create on first run (`keystore`)
//! - AES-256-GCM authenticated encryption (`encryption`)

pub mod encryption;
pub mod keys;
pub mod keystore;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{Cipher, KeyStore, VaultKey};
pub use encryption::{decrypt, encrypt, Cipher};
pub use keys::{VaultKey, KEY_LEN};
pub use keystore::KeyStore;
