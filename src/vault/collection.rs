//! The in-memory record collection.
//!
//! A `Vault` is a map from entry id to `VaultEntry` plus collection
//! metadata.  Its serialized form (`VaultPayload`) is exactly the
//! structure the envelope codec encrypts: entries sorted by id so that
//! sealing the same data twice produces identical plaintext bytes.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::errors::{PassKeepError, Result};

use super::entry::{timestamp_now, VaultEntry};

/// Default length for generated entry passwords.
const DEFAULT_PASSWORD_LENGTH: usize = 24;

/// Collection-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultMeta {
    /// When the vault was first initialized.
    pub created_at: DateTime<FixedOffset>,

    /// When the vault was last mutated.
    pub updated_at: DateTime<FixedOffset>,

    /// Length used by `add --auto` when no explicit length is given.
    #[serde(default = "default_password_length")]
    pub default_password_length: usize,
}

fn default_password_length() -> usize {
    DEFAULT_PASSWORD_LENGTH
}

/// The serialized shape of a vault — what actually gets sealed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultPayload {
    /// All entries, sorted by entry id for canonical bytes.
    pub entries: Vec<VaultEntry>,

    /// Collection metadata.
    pub meta: VaultMeta,
}

/// The decrypted record collection.
#[derive(Debug, Clone)]
pub struct Vault {
    entries: HashMap<String, VaultEntry>,
    /// Collection metadata, public so callers can read defaults.
    pub meta: VaultMeta,
}

impl Default for Vault {
    fn default() -> Self {
        Self::new()
    }
}

impl Vault {
    /// Construct an empty vault with fresh metadata.
    pub fn new() -> Self {
        let now = timestamp_now();
        Self {
            entries: HashMap::new(),
            meta: VaultMeta {
                created_at: now,
                updated_at: now,
                default_password_length: DEFAULT_PASSWORD_LENGTH,
            },
        }
    }

    // ------------------------------------------------------------------
    // CRUD
    // ------------------------------------------------------------------

    /// All entries matching `keyword` (or all entries when `None`),
    /// sorted case-insensitively by (service, username).  The ordering
    /// is a display contract, not a storage order.
    pub fn list(&self, keyword: Option<&str>) -> Vec<&VaultEntry> {
        let mut entries: Vec<&VaultEntry> = self
            .entries
            .values()
            .filter(|e| e.matches(keyword))
            .collect();
        entries.sort_by_key(|e| (e.service.to_lowercase(), e.username.to_lowercase()));
        entries
    }

    /// Insert a new entry and return a reference to it.
    ///
    /// Entry ids come from a CSPRNG, so a collision means the id
    /// invariant is already broken; that is a bug, not an error state.
    pub fn add(&mut self, entry: VaultEntry) -> &VaultEntry {
        let id = entry.entry_id.clone();
        let previous = self.entries.insert(id.clone(), entry);
        assert!(previous.is_none(), "duplicate entry id: {id}");
        self.meta.updated_at = timestamp_now();
        &self.entries[&id]
    }

    /// Look up an entry by id.
    pub fn get(&self, entry_id: &str) -> Result<&VaultEntry> {
        self.entries
            .get(entry_id)
            .ok_or_else(|| PassKeepError::EntryNotFound(entry_id.to_string()))
    }

    /// Mutable access to an entry.  Counts as a collection mutation, so
    /// `meta.updated_at` is refreshed.
    pub fn entry_mut(&mut self, entry_id: &str) -> Result<&mut VaultEntry> {
        let entry = self
            .entries
            .get_mut(entry_id)
            .ok_or_else(|| PassKeepError::EntryNotFound(entry_id.to_string()))?;
        self.meta.updated_at = timestamp_now();
        Ok(entry)
    }

    /// Remove an entry and return it so the caller can report what was
    /// deleted.
    pub fn delete(&mut self, entry_id: &str) -> Result<VaultEntry> {
        let entry = self
            .entries
            .remove(entry_id)
            .ok_or_else(|| PassKeepError::EntryNotFound(entry_id.to_string()))?;
        self.meta.updated_at = timestamp_now();
        Ok(entry)
    }

    /// Number of entries in the vault.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vault has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------

    /// Snapshot the vault into its canonical serializable form.
    pub fn to_payload(&self) -> VaultPayload {
        let mut entries: Vec<VaultEntry> = self.entries.values().cloned().collect();
        entries.sort_by(|a, b| a.entry_id.cmp(&b.entry_id));
        VaultPayload {
            entries,
            meta: self.meta.clone(),
        }
    }

    /// Rebuild a vault from a decrypted payload.
    pub fn from_payload(payload: VaultPayload) -> Self {
        let entries = payload
            .entries
            .into_iter()
            .map(|e| (e.entry_id.clone(), e))
            .collect();
        Self {
            entries,
            meta: payload.meta,
        }
    }
}
