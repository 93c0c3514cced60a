//! Orchestration of the record model, the envelope codec, and the
//! atomic store.
//!
//! `VaultManager` is the only entry point front ends call: `init`,
//! `load`, and `save`.  It holds no password or key material between
//! calls; the master password lives exactly as long as one seal or
//! open.

use crate::crypto::{self, KDF_ITERATIONS};
use crate::errors::{PassKeepError, Result};

use super::collection::{Vault, VaultPayload};
use super::store::EnvelopeStore;

/// Ties the vault, the envelope codec, and the store together.
pub struct VaultManager {
    store: EnvelopeStore,
    kdf_iterations: u32,
}

impl VaultManager {
    /// Create a manager using the default KDF iteration count.
    pub fn new(store: EnvelopeStore) -> Self {
        Self::with_iterations(store, KDF_ITERATIONS)
    }

    /// Create a manager with an explicit KDF iteration count (from
    /// config, or lowered in tests).
    pub fn with_iterations(store: EnvelopeStore, kdf_iterations: u32) -> Self {
        Self {
            store,
            kdf_iterations,
        }
    }

    /// The underlying envelope store.
    pub fn store(&self) -> &EnvelopeStore {
        &self.store
    }

    /// Create a brand-new empty vault and persist it.
    ///
    /// Fails if an envelope already exists at the store location, even
    /// a corrupt one — init never overwrites data.
    pub fn init(&self, master_password: &str) -> Result<Vault> {
        if self.store.exists() {
            return Err(PassKeepError::VaultAlreadyExists(
                self.store.path().to_path_buf(),
            ));
        }
        let vault = Vault::new();
        self.save(master_password, &vault)?;
        Ok(vault)
    }

    /// Read, verify, decrypt, and deserialize the vault.
    pub fn load(&self, master_password: &str) -> Result<Vault> {
        let envelope = self.store.read()?;
        let payload: VaultPayload = crypto::open(master_password, &envelope)?;
        Ok(Vault::from_payload(payload))
    }

    /// Seal the vault under a fresh envelope and persist it, replacing
    /// whatever was there before (single-writer assumption).
    pub fn save(&self, master_password: &str, vault: &Vault) -> Result<()> {
        let envelope = crypto::seal(master_password, &vault.to_payload(), self.kdf_iterations)?;
        self.store.write(&envelope)
    }
}
