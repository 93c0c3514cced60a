//! AES-256-GCM authenticated encryption.
//!
//! Unlike a nonce-prefix layout, the nonce is kept as an explicit
//! parameter here because the vault envelope stores it as a separate
//! field.  Callers are responsible for generating a fresh nonce per
//! encryption (`generate_nonce`).

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::{PassKeepError, Result};

/// Size of the AES-256-GCM nonce in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// Generate a cryptographically random 12-byte nonce.
pub fn generate_nonce() -> [u8; NONCE_LEN] {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

/// Encrypt `plaintext` with a 32-byte `key` and a 12-byte `nonce`.
///
/// Returns the ciphertext with the 16-byte auth tag appended.
pub fn encrypt(key: &[u8], nonce: &[u8; NONCE_LEN], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| PassKeepError::EncryptionFailed(format!("invalid key length: {e}")))?;

    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| PassKeepError::EncryptionFailed(format!("encryption error: {e}")))
}

/// Decrypt and verify ciphertext produced by `encrypt`.
///
/// A failed tag check means the wrong key (wrong master password) or a
/// corrupted ciphertext; both surface as `Authentication`.
pub fn decrypt(key: &[u8], nonce: &[u8; NONCE_LEN], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| PassKeepError::Authentication)?;

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| PassKeepError::Authentication)
}
