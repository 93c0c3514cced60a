//! Cryptographic primitives for PassKeep.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA512 password-based key derivation (`kdf`)
//! - AES-256-GCM encryption and decryption (`encryption`)
//! - The versioned, authenticated vault envelope (`envelope`)

pub mod encryption;
pub mod envelope;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, open, derive_key, ...};
pub use envelope::{open, seal, Envelope};
pub use kdf::{derive_key, generate_salt, KDF_ITERATIONS};
