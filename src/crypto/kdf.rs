//! Password-based key derivation using PBKDF2-HMAC-SHA512.
//!
//! PBKDF2 with a high iteration count makes brute-forcing the master
//! password expensive.  The iteration count is stored in the envelope
//! so the exact same settings are used when re-opening a vault.

use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha512;

use crate::errors::{PassKeepError, Result};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Default PBKDF2 iteration count.
pub const KDF_ITERATIONS: u32 = 310_000;

/// Derive a 32-byte key from a master password and salt.
///
/// Deterministic: the same password + salt + iterations always produce
/// the same key.  Zero-length salts and zero iteration counts are
/// programmer errors and fail fast.
pub fn derive_key(master_password: &[u8], salt: &[u8], iterations: u32) -> Result<[u8; KEY_LEN]> {
    if salt.is_empty() {
        return Err(PassKeepError::Validation(
            "KDF salt must not be empty".into(),
        ));
    }
    if iterations == 0 {
        return Err(PassKeepError::Validation(
            "KDF iteration count must be at least 1".into(),
        ));
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha512>(master_password, salt, iterations, &mut key);
    Ok(key)
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}
