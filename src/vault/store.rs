//! Atomic on-disk persistence for one envelope.
//!
//! Writes go to a temp file in the same directory followed by a rename,
//! so a crash at any point leaves either the old envelope or the new
//! one fully in place — never a partial file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::crypto::Envelope;
use crate::errors::{PassKeepError, Result};

/// Durable storage for a single vault envelope.
pub struct EnvelopeStore {
    path: PathBuf,
}

impl EnvelopeStore {
    /// Create a store handle for the given file path.  Nothing is
    /// touched on disk until `read` or `write` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The target file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pure existence check — a corrupt file still "exists".
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and parse the envelope from disk.
    pub fn read(&self) -> Result<Envelope> {
        if !self.exists() {
            return Err(PassKeepError::VaultNotInitialized(self.path.clone()));
        }

        let data = fs::read(&self.path)?;
        serde_json::from_slice(&data)
            .map_err(|e| PassKeepError::Integrity(format!("envelope JSON: {e}")))
    }

    /// Write the envelope to disk atomically.
    ///
    /// 1. Create the parent directory if needed.
    /// 2. Serialize to pretty JSON.
    /// 3. Write to a temp file in the same directory, so the rename is
    ///    guaranteed to stay on one filesystem.
    /// 4. Rename the temp file over the target path.
    pub fn write(&self, envelope: &Envelope) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_vec_pretty(envelope)
            .map_err(|e| PassKeepError::SerializationError(format!("envelope: {e}")))?;

        let parent = self.path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        ));

        fs::write(&tmp_path, &data)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::seal;
    use tempfile::TempDir;

    fn sample_envelope(marker: u32) -> Envelope {
        seal("test-password", &serde_json::json!({ "marker": marker }), 1_000).unwrap()
    }

    #[test]
    fn read_missing_file_is_not_initialized() {
        let dir = TempDir::new().unwrap();
        let store = EnvelopeStore::new(dir.path().join("vault.sec"));

        assert!(!store.exists());
        assert!(matches!(
            store.read(),
            Err(PassKeepError::VaultNotInitialized(_))
        ));
    }

    #[test]
    fn write_then_read_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = EnvelopeStore::new(dir.path().join("vault.sec"));

        let envelope = sample_envelope(1);
        store.write(&envelope).unwrap();
        assert!(store.exists());

        let read_back = store.read().unwrap();
        assert_eq!(read_back.checksum, envelope.checksum);
        assert_eq!(read_back.cipher.payload, envelope.cipher.payload);
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = EnvelopeStore::new(dir.path().join("nested/deeper/vault.sec"));

        store.write(&sample_envelope(1)).unwrap();
        assert!(store.exists());
    }

    #[test]
    fn garbage_file_is_integrity_error_not_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vault.sec");
        fs::write(&path, b"definitely not json{{{").unwrap();

        let store = EnvelopeStore::new(&path);
        assert!(store.exists());
        assert!(matches!(store.read(), Err(PassKeepError::Integrity(_))));
    }

    #[test]
    fn crash_before_rename_leaves_previous_envelope_intact() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vault.sec");
        let store = EnvelopeStore::new(&path);

        let first = sample_envelope(1);
        store.write(&first).unwrap();

        // Simulate a crash between temp-file write and rename: a
        // half-written temp file sits next to the real one.
        let tmp_path = dir.path().join(".vault.sec.tmp");
        fs::write(&tmp_path, b"{ \"version\": 2, truncated").unwrap();

        // The target is untouched and still readable.
        let read_back = store.read().unwrap();
        assert_eq!(read_back.checksum, first.checksum);

        // A subsequent write replaces both cleanly.
        let second = sample_envelope(2);
        store.write(&second).unwrap();
        assert_eq!(store.read().unwrap().checksum, second.checksum);
        assert!(!tmp_path.exists());
    }

    #[test]
    fn crash_on_first_init_leaves_no_envelope() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vault.sec");

        // Only the temp file exists — the rename never happened.
        fs::write(dir.path().join(".vault.sec.tmp"), b"partial").unwrap();

        let store = EnvelopeStore::new(&path);
        assert!(!store.exists());
        assert!(matches!(
            store.read(),
            Err(PassKeepError::VaultNotInitialized(_))
        ));
    }
}
