//! CLI module — Clap argument parser, output helpers, and command
//! implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PassKeepError, Result};
use crate::generator::SymbolSet;
use crate::vault::{EnvelopeStore, VaultManager};

/// Minimum master password length.
const MIN_MASTER_PASSWORD_LEN: usize = 8;

/// Minimum entry password length when typed interactively.
const MIN_ENTRY_PASSWORD_LEN: usize = 6;

/// PassKeep CLI: encrypted password manager.
#[derive(Parser)]
#[command(
    name = "passkeep",
    about = "Encrypted password manager",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the vault file (default: ~/.passkeep/vault.sec)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Initialize a new vault
    Init,

    /// Add a new entry to the vault
    Add {
        /// Service label (e.g. github)
        #[arg(long)]
        service: String,

        /// Account identifier at that service
        #[arg(long)]
        username: String,

        /// Entry password (omit for interactive prompt)
        #[arg(long)]
        password: Option<String>,

        /// Free-text notes
        #[arg(long, default_value = "")]
        notes: String,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,

        /// Generate the entry password automatically
        #[arg(long)]
        auto: bool,

        /// Generated password length (default: the vault's configured length)
        #[arg(long)]
        length: Option<usize>,

        /// Symbol density for generated passwords: none, soft, or hard
        #[arg(long, default_value = "soft")]
        symbols: SymbolSet,

        /// Keep visually ambiguous characters in generated passwords
        #[arg(long)]
        allow_ambiguous: bool,
    },

    /// List entries in a table
    List {
        /// Filter on service, username, or tags
        #[arg(long)]
        filter: Option<String>,
    },

    /// Show a single entry
    Show {
        /// Entry id
        #[arg(long)]
        id: String,

        /// Print the password in plaintext
        #[arg(long)]
        reveal: bool,
    },

    /// Update an existing entry's password, notes, or tags
    Update {
        /// Entry id
        #[arg(long)]
        id: String,

        /// New entry password (omit with --auto to generate one)
        #[arg(long)]
        password: Option<String>,

        /// Generate the new password automatically
        #[arg(long)]
        auto: bool,

        /// New notes
        #[arg(long)]
        notes: Option<String>,

        /// New comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },

    /// Delete an entry permanently
    Delete {
        /// Entry id
        #[arg(long)]
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a standalone password
    Generate {
        /// Password length
        #[arg(long, default_value_t = 28)]
        length: usize,

        /// Symbol density: none, soft, or hard
        #[arg(long, default_value = "hard")]
        symbols: SymbolSet,

        /// Keep visually ambiguous characters
        #[arg(long)]
        allow_ambiguous: bool,

        /// Drop the at-least-one-per-category guarantee
        #[arg(long)]
        no_require_each: bool,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Build a `VaultManager` from the CLI flags and user settings.
///
/// The `--vault` flag wins over the config file, which wins over the
/// default `~/.passkeep/vault.sec`.
pub fn open_manager(cli: &Cli) -> Result<VaultManager> {
    let settings = Settings::load()?;
    let path = match &cli.vault {
        Some(path) => path.clone(),
        None => settings.vault_path()?,
    };
    Ok(VaultManager::with_iterations(
        EnvelopeStore::new(path),
        settings.kdf_iterations,
    ))
}

/// Get the master password, trying in order:
/// 1. `PASSKEEP_PASSWORD` env var (CI/scripting)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on
/// drop.
pub fn prompt_master_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSKEEP_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Master password")
        .interact()
        .map_err(|e| PassKeepError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master password with confirmation (used by `init`).
///
/// Also respects `PASSKEEP_PASSWORD` for scripted usage.  Enforces the
/// minimum master password length.
pub fn prompt_new_master_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSKEEP_PASSWORD") {
        if !pw.is_empty() {
            if pw.len() < MIN_MASTER_PASSWORD_LEN {
                return Err(PassKeepError::Validation(format!(
                    "master password must be at least {MIN_MASTER_PASSWORD_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let pw = dialoguer::Password::new()
            .with_prompt("Master password")
            .with_confirmation("Master password (again)", "Passwords do not match")
            .interact()
            .map_err(|e| PassKeepError::CommandFailed(format!("password prompt: {e}")))?;

        if pw.len() < MIN_MASTER_PASSWORD_LEN {
            output::warning(&format!(
                "Master password must be at least {MIN_MASTER_PASSWORD_LEN} characters."
            ));
            continue;
        }
        return Ok(Zeroizing::new(pw));
    }
}

/// Prompt for an entry password with confirmation (used by `add` and
/// `update` when no value is given).
pub fn prompt_entry_password() -> Result<Zeroizing<String>> {
    loop {
        let pw = dialoguer::Password::new()
            .with_prompt("Entry password")
            .with_confirmation("Entry password (again)", "Passwords do not match")
            .interact()
            .map_err(|e| PassKeepError::CommandFailed(format!("password prompt: {e}")))?;

        if pw.len() < MIN_ENTRY_PASSWORD_LEN {
            output::warning(&format!(
                "Entry password must be at least {MIN_ENTRY_PASSWORD_LEN} characters."
            ));
            continue;
        }
        return Ok(Zeroizing::new(pw));
    }
}

/// Split a comma-separated tag list, dropping blanks.
pub fn parse_tags(text: Option<&str>) -> Vec<String> {
    text.map(|t| {
        t.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
