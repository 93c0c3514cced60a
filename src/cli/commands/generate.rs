//! `passkeep generate` — produce a standalone password without touching
//! any vault.

use crate::cli::output;
use crate::errors::Result;
use crate::generator::{self, GeneratorOptions, SymbolSet};

/// Execute the `generate` command.
pub fn execute(
    length: usize,
    symbols: SymbolSet,
    allow_ambiguous: bool,
    no_require_each: bool,
) -> Result<()> {
    let options = GeneratorOptions {
        length,
        symbols,
        allow_ambiguous,
        require_each_category: !no_require_each,
    };

    let password = generator::generate(&options)?;
    output::print_generated_password(&password);

    Ok(())
}
