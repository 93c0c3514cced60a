//! Cryptographically secure password generation.
//!
//! Passwords are assembled from per-category alphabets (lowercase,
//! uppercase, digits, and an optional symbol set), optionally filtered
//! of visually ambiguous characters.  Every draw and the final shuffle
//! use the OS random number generator.

use std::collections::BTreeSet;
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::seq::SliceRandom;

use crate::errors::{PassKeepError, Result};

/// Minimum accepted password length.
pub const MIN_LENGTH: usize = 8;

/// Minimum number of distinct characters in the merged pool.  Prevents
/// generating low-entropy passwords under aggressive filtering.
const MIN_POOL_DIVERSITY: usize = 10;

/// Characters that are easy to confuse with one another.
pub const AMBIGUOUS: &str = "O0I1l|S5B8G6Z2";

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Symbol density of a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolSet {
    /// No symbols at all.
    None,
    /// A small, shell-friendly symbol set.
    #[default]
    Soft,
    /// The full symbol set.
    Hard,
}

impl SymbolSet {
    /// The symbol alphabet for this density, before ambiguity filtering.
    pub fn alphabet(self) -> &'static str {
        match self {
            SymbolSet::None => "",
            SymbolSet::Soft => "!@#$%^&*?",
            SymbolSet::Hard => "!@#$%^&*?-_=+[]{}()<>:;,./|~",
        }
    }
}

impl FromStr for SymbolSet {
    type Err = PassKeepError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(SymbolSet::None),
            "soft" => Ok(SymbolSet::Soft),
            "hard" => Ok(SymbolSet::Hard),
            other => Err(PassKeepError::Validation(format!(
                "invalid symbol set '{other}' — expected none, soft, or hard"
            ))),
        }
    }
}

/// Options controlling password generation.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorOptions {
    /// Requested password length (minimum 8).
    pub length: usize,

    /// Symbol density.
    pub symbols: SymbolSet,

    /// Keep visually ambiguous characters (`O`/`0`, `I`/`1`/`l`, ...).
    pub allow_ambiguous: bool,

    /// Guarantee at least one character from each active category.
    pub require_each_category: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 24,
            symbols: SymbolSet::Soft,
            allow_ambiguous: false,
            require_each_category: true,
        }
    }
}

impl GeneratorOptions {
    /// Reject out-of-range options before any randomness is drawn.
    pub fn validate(&self) -> Result<()> {
        if self.length < MIN_LENGTH {
            return Err(PassKeepError::Validation(format!(
                "password length must be at least {MIN_LENGTH}"
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate a random password according to `options`.
///
/// When `require_each_category` is set, the output is seeded with one
/// character from every non-empty category pool, padded from the merged
/// pool, and then shuffled so the seeded characters are not predictably
/// placed at the front.
pub fn generate(options: &GeneratorOptions) -> Result<String> {
    options.validate()?;

    let pools: Vec<Vec<u8>> = [
        LOWERCASE,
        UPPERCASE,
        DIGITS,
        options.symbols.alphabet(),
    ]
    .iter()
    .map(|alphabet| sanitize(alphabet, options.allow_ambiguous))
    .filter(|pool| !pool.is_empty())
    .collect();

    let merged: Vec<u8> = pools.iter().flatten().copied().collect();
    let distinct: BTreeSet<u8> = merged.iter().copied().collect();
    if distinct.len() < MIN_POOL_DIVERSITY {
        return Err(PassKeepError::Validation(format!(
            "character pool too small ({} distinct) — relax the filters",
            distinct.len()
        )));
    }

    let mut rng = OsRng;
    let mut chars: Vec<u8> = Vec::with_capacity(options.length);

    if options.require_each_category {
        for pool in &pools {
            // Pools are non-empty by construction.
            if let Some(ch) = pool.choose(&mut rng) {
                chars.push(*ch);
            }
        }
    }

    while chars.len() < options.length {
        if let Some(ch) = merged.choose(&mut rng) {
            chars.push(*ch);
        }
    }

    chars.shuffle(&mut rng);
    chars.truncate(options.length);

    Ok(chars.into_iter().map(char::from).collect())
}

/// Strip ambiguous characters from an alphabet unless they are allowed.
fn sanitize(alphabet: &str, allow_ambiguous: bool) -> Vec<u8> {
    alphabet
        .bytes()
        .filter(|b| allow_ambiguous || !AMBIGUOUS.as_bytes().contains(b))
        .collect()
}
