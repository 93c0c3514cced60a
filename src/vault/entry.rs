//! A single credential record.
//!
//! Entry ids are generated once at creation (12 random bytes, hex) and
//! never change.  All timestamps use a single fixed UTC+4 offset,
//! truncated to whole seconds, so vaults moved between machines never
//! disagree about local time.

use chrono::{DateTime, FixedOffset, SubsecRound, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Number of random bytes in an entry id (24 hex characters).
const ENTRY_ID_BYTES: usize = 12;

/// The fixed offset used for every vault timestamp.
const UTC_OFFSET_SECS: i32 = 4 * 3600;

/// Current time at the vault's fixed UTC+4 offset, whole seconds.
pub(crate) fn timestamp_now() -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(UTC_OFFSET_SECS).expect("UTC+4 is a valid offset");
    Utc::now().with_timezone(&offset).trunc_subsecs(0)
}

/// Generate a fresh, globally unique entry id.
fn new_entry_id() -> String {
    let mut bytes = [0u8; ENTRY_ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// A single stored credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultEntry {
    /// Service label (e.g. "github").
    pub service: String,

    /// Account identifier at that service.
    pub username: String,

    /// The secret value, plaintext once the vault is decrypted.
    pub password: String,

    /// Free-text notes.
    #[serde(default)]
    pub notes: String,

    /// Unordered string tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Opaque unique id, fixed for the entry's lifetime.
    pub entry_id: String,

    /// When the entry was created.
    pub created_at: DateTime<FixedOffset>,

    /// When the entry was last modified.  Always >= `created_at`.
    pub updated_at: DateTime<FixedOffset>,
}

impl VaultEntry {
    /// Create a new entry with a fresh id and current timestamps.
    pub fn new(
        service: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        notes: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        let now = timestamp_now();
        Self {
            service: service.into(),
            username: username.into(),
            password: password.into(),
            notes: notes.into(),
            tags,
            entry_id: new_entry_id(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the stored password and refresh `updated_at`.
    pub fn update_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.touch();
    }

    /// Replace the notes and refresh `updated_at`.
    pub fn update_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
        self.touch();
    }

    /// Replace the tag list and refresh `updated_at`.
    pub fn update_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
        self.touch();
    }

    /// Refresh the last-modified timestamp.
    pub fn touch(&mut self) {
        self.updated_at = timestamp_now();
    }

    /// Case-insensitive substring match over service, username, and
    /// tags.  An absent or blank keyword matches everything.  Pure: no
    /// side effects.
    pub fn matches(&self, keyword: Option<&str>) -> bool {
        let Some(keyword) = keyword.map(str::trim).filter(|k| !k.is_empty()) else {
            return true;
        };
        let needle = keyword.to_lowercase();
        let haystack = format!(
            "{}|{}|{}",
            self.service,
            self.username,
            self.tags.join(" ")
        )
        .to_lowercase();
        haystack.contains(&needle)
    }
}
