use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::errors::{PassKeepError, Result};

/// User-level configuration, loaded from `~/.passkeep/config.toml`.
///
/// Every field has a sensible default so PassKeep works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Where the encrypted vault file lives.  Defaults to
    /// `~/.passkeep/vault.sec`.
    #[serde(default)]
    pub vault_path: Option<PathBuf>,

    /// PBKDF2 iteration count used when sealing (default: 310 000).
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_kdf_iterations() -> u32 {
    crate::crypto::KDF_ITERATIONS
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_path: None,
            kdf_iterations: default_kdf_iterations(),
        }
    }
}

impl Settings {
    /// Name of the config file inside the PassKeep home directory.
    const FILE_NAME: &'static str = "config.toml";

    /// The per-user PassKeep directory (`~/.passkeep`).
    pub fn home_dir() -> Result<PathBuf> {
        let base = BaseDirs::new()
            .ok_or_else(|| PassKeepError::ConfigError("cannot locate home directory".into()))?;
        Ok(base.home_dir().join(".passkeep"))
    }

    /// Load settings from `~/.passkeep/config.toml`.
    ///
    /// If the file does not exist, defaults are returned.  If the file
    /// exists but cannot be parsed, an error is returned — a broken
    /// config should be fixed, not silently ignored.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::home_dir()?)
    }

    /// Load settings from `<dir>/config.toml` (injectable for tests).
    pub fn load_from(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&config_path)?;
        toml::from_str(&raw).map_err(|e| {
            PassKeepError::ConfigError(format!("{}: {e}", config_path.display()))
        })
    }

    /// Resolve the vault file path: explicit config value, or the
    /// default `~/.passkeep/vault.sec`.
    pub fn vault_path(&self) -> Result<PathBuf> {
        match &self.vault_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::home_dir()?.join("vault.sec")),
        }
    }
}
