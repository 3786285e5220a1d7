//! Integration tests for the PassVault crypto module.

use std::fs;

use passvault::crypto::{decrypt, encrypt, Cipher, KeyStore, VaultKey, KEY_LEN};
use passvault::errors::PassVaultError;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Encryption round-trip
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = [0xABu8; 32];
    let plaintext = br#"{"Gmail":{"login":"bob","password":"pw"}}"#;

    let ciphertext = encrypt(&key, plaintext).expect("encrypt should succeed");

    // Ciphertext must be longer than plaintext (12-byte nonce + 16-byte tag).
    assert_eq!(ciphertext.len(), plaintext.len() + 12 + 16);

    let recovered = decrypt(&key, &ciphertext).expect("decrypt should succeed");
    assert_eq!(recovered, plaintext);
}

#[test]
fn encrypt_produces_different_ciphertext_each_time() {
    let key = [0xCDu8; 32];
    let plaintext = b"{}";

    let ct1 = encrypt(&key, plaintext).expect("encrypt 1");
    let ct2 = encrypt(&key, plaintext).expect("encrypt 2");

    // Because each call generates a new random nonce, the output must differ.
    assert_ne!(ct1, ct2, "two encryptions of the same plaintext must differ");
}

#[test]
fn decrypt_with_wrong_key_fails() {
    let ciphertext = encrypt(&[0x11u8; 32], b"payload").expect("encrypt");
    let result = decrypt(&[0x22u8; 32], &ciphertext);

    assert!(matches!(result, Err(PassVaultError::DecryptionFailed)));
}

#[test]
fn flipping_any_byte_fails_authentication() {
    let key = [0xBBu8; 32];
    let ciphertext = encrypt(&key, b"some vault payload").expect("encrypt");

    for i in 0..ciphertext.len() {
        let mut tampered = ciphertext.clone();
        tampered[i] ^= 0x01;
        assert!(
            decrypt(&key, &tampered).is_err(),
            "flipping byte {i} must fail the auth check"
        );
    }
}

#[test]
fn decrypt_with_truncated_data_fails() {
    let key = [0xAAu8; 32];
    assert!(decrypt(&key, &[0u8; 5]).is_err());
    assert!(decrypt(&key, &[]).is_err());
}

// ---------------------------------------------------------------------------
// Key store + cipher together
// ---------------------------------------------------------------------------

#[test]
fn generated_key_drives_cipher() {
    let dir = TempDir::new().unwrap();
    let store = KeyStore::new(dir.path().join("key.key"));

    let key = store.ensure_key().expect("create key");
    assert_eq!(key.len(), KEY_LEN);

    let cipher = Cipher::new(key);
    let ct = cipher.encrypt(b"hello").unwrap();

    // Reload the key from disk and decrypt with a fresh cipher.
    let reloaded = Cipher::new(store.ensure_key().expect("load key"));
    assert_eq!(reloaded.decrypt(&ct).unwrap().as_slice(), b"hello");
}

#[test]
fn ensure_key_writes_file_exactly_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("key.key");
    let store = KeyStore::new(&path);

    let first = store.ensure_key().unwrap();
    let modified = fs::metadata(&path).unwrap().modified().unwrap();
    let second = store.ensure_key().unwrap();

    assert_eq!(first.as_bytes(), second.as_bytes());
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), modified);
}

#[test]
fn corrupted_key_surfaces_on_decrypt() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("key.key");
    let store = KeyStore::new(&path);
    let ct = Cipher::new(store.ensure_key().unwrap())
        .encrypt(b"data")
        .unwrap();

    // Truncate the key file: loading still succeeds, decrypting does not.
    let mut bytes = fs::read(&path).unwrap();
    bytes.truncate(16);
    fs::write(&path, &bytes).unwrap();

    let key = store.ensure_key().expect("short key still loads");
    assert_eq!(key.as_bytes(), bytes.as_slice());
    assert!(matches!(
        Cipher::new(key).decrypt(&ct),
        Err(PassVaultError::DecryptionFailed)
    ));
}

#[test]
fn vault_key_debug_is_redacted() {
    let key = VaultKey::new(vec![7u8; KEY_LEN]);
    assert!(format!("{key:?}").contains("REDACTED"));
}
