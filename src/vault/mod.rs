//! Vault module — the decrypted record model and its persistence.
//!
//! This module provides:
//! - `VaultEntry`, a single credential record (`entry`)
//! - `Vault`, the in-memory record collection (`collection`)
//! - `EnvelopeStore`, atomic on-disk envelope persistence (`store`)
//! - `VaultManager`, the init/load/save orchestration (`manager`)

pub mod collection;
pub mod entry;
pub mod manager;
pub mod store;

// Re-export the most commonly used items.
pub use collection::{Vault, VaultMeta, VaultPayload};
pub use entry::VaultEntry;
pub use manager::VaultManager;
pub use store::EnvelopeStore;
