//! The versioned vault envelope: the only artifact that ever touches
//! durable storage.
//!
//! An envelope is a self-describing JSON document:
//!
//! ```json
//! {
//!   "version": 1,
//!   "kdf": { "name": "PBKDF2-HMAC-SHA512", "iterations": 310000, "salt": "<base64>" },
//!   "cipher": { "name": "AES-256-GCM", "nonce": "<base64>", "payload": "<base64>" },
//!   "checksum": "<hex SHA-256 of the ciphertext>"
//! }
//! ```
//!
//! The checksum is a fast pre-decryption corruption detector; the GCM
//! tag inside `payload` is the actual cryptographic authenticity
//! guarantee.  Both seal and open compute the checksum with SHA-256.
//!
//! Every `seal` draws a fresh salt and a fresh nonce, so nonces are
//! never reused across envelopes: each ciphertext is produced under its
//! own derived key.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::errors::{PassKeepError, Result};

use super::encryption::{self, NONCE_LEN};
use super::kdf;

/// Current envelope format version.
pub const ENVELOPE_VERSION: u32 = 1;

/// KDF algorithm identifier written into every envelope.
pub const KDF_NAME: &str = "PBKDF2-HMAC-SHA512";

/// Cipher algorithm identifier written into every envelope.
pub const CIPHER_NAME: &str = "AES-256-GCM";

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Key-derivation parameters stored in the envelope so the exact same
/// settings are used when re-opening.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KdfParams {
    /// Algorithm name, always `PBKDF2-HMAC-SHA512` for version 1.
    pub name: String,

    /// PBKDF2 iteration count used when this envelope was sealed.
    pub iterations: u32,

    /// The random salt (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub salt: Vec<u8>,
}

/// Cipher parameters and the ciphertext itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CipherParams {
    /// Algorithm name, always `AES-256-GCM` for version 1.
    pub name: String,

    /// The random 96-bit nonce (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub nonce: Vec<u8>,

    /// Ciphertext plus 16-byte GCM tag (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub payload: Vec<u8>,
}

/// A sealed vault.  Contains no plaintext, no key, and no password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Format version.
    pub version: u32,

    /// Key-derivation parameters.
    pub kdf: KdfParams,

    /// Cipher parameters and ciphertext.
    pub cipher: CipherParams,

    /// Hex-encoded SHA-256 of the ciphertext.
    pub checksum: String,
}

// ---------------------------------------------------------------------------
// Seal / open
// ---------------------------------------------------------------------------

/// Serialize `payload`, encrypt it under `master_password`, and wrap it
/// in a fresh envelope.
///
/// The plaintext bytes come from `serde_json::to_vec`, which is
/// deterministic for a given value (struct fields serialize in
/// declaration order, with no extra whitespace), so sealing identical
/// data yields identical plaintext bytes.
pub fn seal<T: Serialize>(master_password: &str, payload: &T, iterations: u32) -> Result<Envelope> {
    let mut plaintext = serde_json::to_vec(payload)
        .map_err(|e| PassKeepError::SerializationError(format!("payload: {e}")))?;

    let salt = kdf::generate_salt();
    let nonce = encryption::generate_nonce();

    let mut key = kdf::derive_key(master_password.as_bytes(), &salt, iterations)?;
    let ciphertext = encryption::encrypt(&key, &nonce, &plaintext);
    key.zeroize();
    plaintext.zeroize();
    let ciphertext = ciphertext?;

    let checksum = checksum_hex(&ciphertext);

    Ok(Envelope {
        version: ENVELOPE_VERSION,
        kdf: KdfParams {
            name: KDF_NAME.to_string(),
            iterations,
            salt: salt.to_vec(),
        },
        cipher: CipherParams {
            name: CIPHER_NAME.to_string(),
            nonce: nonce.to_vec(),
            payload: ciphertext,
        },
        checksum,
    })
}

/// Verify, decrypt, and deserialize an envelope.
///
/// Order of checks:
/// 1. Structural validation of the envelope fields — `Integrity`.
/// 2. Checksum over the ciphertext, before any key derivation — `Integrity`.
/// 3. AEAD decryption — `Authentication` on tag failure.
/// 4. Deserialization of the plaintext — `Integrity`.
pub fn open<T: DeserializeOwned>(master_password: &str, envelope: &Envelope) -> Result<T> {
    validate_structure(envelope)?;
    verify_checksum(envelope)?;

    let nonce: [u8; NONCE_LEN] = envelope
        .cipher
        .nonce
        .as_slice()
        .try_into()
        .map_err(|_| PassKeepError::Integrity("bad nonce length".into()))?;

    let mut key = kdf::derive_key(
        master_password.as_bytes(),
        &envelope.kdf.salt,
        envelope.kdf.iterations,
    )?;
    let plaintext = encryption::decrypt(&key, &nonce, &envelope.cipher.payload);
    key.zeroize();
    let mut plaintext = plaintext?;

    let payload = serde_json::from_slice(&plaintext)
        .map_err(|e| PassKeepError::Integrity(format!("payload did not parse: {e}")));
    plaintext.zeroize();
    payload
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Hex-encoded SHA-256 over the ciphertext.  Used identically on the
/// seal and open sides.
fn checksum_hex(ciphertext: &[u8]) -> String {
    hex::encode(Sha256::digest(ciphertext))
}

/// Reject envelopes whose fields are missing, malformed, or announce
/// algorithms this version does not speak.
fn validate_structure(envelope: &Envelope) -> Result<()> {
    if envelope.version != ENVELOPE_VERSION {
        return Err(PassKeepError::Integrity(format!(
            "unsupported envelope version {}, expected {ENVELOPE_VERSION}",
            envelope.version
        )));
    }
    if envelope.kdf.name != KDF_NAME {
        return Err(PassKeepError::Integrity(format!(
            "unknown KDF '{}'",
            envelope.kdf.name
        )));
    }
    if envelope.cipher.name != CIPHER_NAME {
        return Err(PassKeepError::Integrity(format!(
            "unknown cipher '{}'",
            envelope.cipher.name
        )));
    }
    if envelope.kdf.salt.is_empty() {
        return Err(PassKeepError::Integrity("empty KDF salt".into()));
    }
    if envelope.kdf.iterations == 0 {
        return Err(PassKeepError::Integrity("zero KDF iterations".into()));
    }
    if envelope.cipher.nonce.len() != NONCE_LEN {
        return Err(PassKeepError::Integrity(format!(
            "nonce must be {NONCE_LEN} bytes, got {}",
            envelope.cipher.nonce.len()
        )));
    }
    Ok(())
}

/// Recompute the ciphertext checksum and compare it to the stored one
/// in constant time.
fn verify_checksum(envelope: &Envelope) -> Result<()> {
    let stored = hex::decode(&envelope.checksum)
        .map_err(|_| PassKeepError::Integrity("checksum is not valid hex".into()))?;
    let computed = Sha256::digest(&envelope.cipher.payload);

    if computed.as_slice().ct_eq(&stored).unwrap_u8() == 0 {
        return Err(PassKeepError::Integrity(
            "checksum mismatch — vault file is corrupted".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Serde helpers for base64-encoded Vec<u8> fields
// ---------------------------------------------------------------------------

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

pub(crate) fn base64_encode<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&BASE64.encode(data))
}

pub(crate) fn base64_decode<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BASE64.decode(&s).map_err(serde::de::Error::custom)
}
