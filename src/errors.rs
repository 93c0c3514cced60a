use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassKeep.
#[derive(Debug, Error)]
pub enum PassKeepError {
    // --- Validation errors ---
    #[error("Invalid parameter: {0}")]
    Validation(String),

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Wrong master password or corrupted data")]
    Authentication,

    // --- Vault errors ---
    #[error("No vault found at {0} — run `passkeep init` first")]
    VaultNotInitialized(PathBuf),

    #[error("Vault already exists at {0}")]
    VaultAlreadyExists(PathBuf),

    #[error("Vault integrity check failed: {0}")]
    Integrity(String),

    #[error("Entry '{0}' not found")]
    EntryNotFound(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,

    #[error("Password mismatch — passwords do not match")]
    PasswordMismatch,
}

/// Convenience type alias for PassKeep results.
pub type Result<T> = std::result::Result<T, PassKeepError>;
