//! The symmetric vault key held in memory.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of a freshly generated key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Raw key bytes that are wiped from memory when dropped.
///
/// The length is not validated here: a key file with the wrong size is
/// accepted as-is and only fails later, when the cipher rejects it.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct VaultKey {
    bytes: Vec<u8>,
}

impl VaultKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to build a cipher).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for VaultKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_key_bytes() {
        let key = VaultKey::new(vec![0x41; KEY_LEN]);
        let printed = format!("{key:?}");
        assert!(printed.contains("REDACTED"));
        assert!(!printed.contains("65"));
    }

    #[test]
    fn accepts_any_length() {
        let key = VaultKey::new(vec![1, 2, 3]);
        assert_eq!(key.len(), 3);
        assert_eq!(key.as_bytes(), &[1, 2, 3]);
    }
}
