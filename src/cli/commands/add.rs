//! `passkeep add` — add a new entry, optionally with a generated
//! password.

use zeroize::Zeroizing;

use crate::cli::{
    open_manager, output, parse_tags, prompt_entry_password, prompt_master_password, Cli,
};
use crate::errors::Result;
use crate::generator::{self, GeneratorOptions, SymbolSet};

/// Arguments for the `add` command, taken from the parsed CLI.
pub struct AddArgs<'a> {
    pub service: &'a str,
    pub username: &'a str,
    pub password: Option<&'a str>,
    pub notes: &'a str,
    pub tags: Option<&'a str>,
    pub auto: bool,
    pub length: Option<usize>,
    pub symbols: SymbolSet,
    pub allow_ambiguous: bool,
}

/// Execute the `add` command.
pub fn execute(cli: &Cli, args: &AddArgs<'_>) -> Result<()> {
    let manager = open_manager(cli)?;
    let master = prompt_master_password()?;
    let mut vault = manager.load(&master)?;

    // Resolve the entry password: generated, given, or prompted.
    let (password, generated) = if args.auto {
        let options = GeneratorOptions {
            length: args.length.unwrap_or(vault.meta.default_password_length),
            symbols: args.symbols,
            allow_ambiguous: args.allow_ambiguous,
            require_each_category: true,
        };
        (Zeroizing::new(generator::generate(&options)?), true)
    } else if let Some(password) = args.password {
        (Zeroizing::new(password.to_string()), false)
    } else {
        (prompt_entry_password()?, false)
    };

    let entry = crate::vault::VaultEntry::new(
        args.service,
        args.username,
        password.as_str(),
        args.notes,
        parse_tags(args.tags),
    );
    let entry_id = vault.add(entry).entry_id.clone();
    manager.save(&master, &vault)?;

    output::success(&format!(
        "Added entry {entry_id} ({} / {})",
        args.service, args.username
    ));
    if generated {
        output::print_generated_password(&password);
    }

    Ok(())
}
