//! `passkeep update` — change an existing entry's password, notes, or
//! tags.

use zeroize::Zeroizing;

use crate::cli::{open_manager, output, parse_tags, prompt_master_password, Cli};
use crate::errors::{PassKeepError, Result};
use crate::generator::{self, GeneratorOptions};

/// Arguments for the `update` command.
pub struct UpdateArgs<'a> {
    pub id: &'a str,
    pub password: Option<&'a str>,
    pub auto: bool,
    pub notes: Option<&'a str>,
    pub tags: Option<&'a str>,
}

/// Execute the `update` command.
pub fn execute(cli: &Cli, args: &UpdateArgs<'_>) -> Result<()> {
    if args.password.is_none() && !args.auto && args.notes.is_none() && args.tags.is_none() {
        return Err(PassKeepError::CommandFailed(
            "nothing to update — pass --password, --auto, --notes, or --tags".into(),
        ));
    }

    let manager = open_manager(cli)?;
    let master = prompt_master_password()?;
    let mut vault = manager.load(&master)?;

    // Generate the replacement password before borrowing the entry.
    let new_password: Option<Zeroizing<String>> = if args.auto {
        let options = GeneratorOptions {
            length: vault.meta.default_password_length,
            ..GeneratorOptions::default()
        };
        Some(Zeroizing::new(generator::generate(&options)?))
    } else {
        args.password.map(|p| Zeroizing::new(p.to_string()))
    };

    let entry = vault.entry_mut(args.id)?;
    if let Some(password) = &new_password {
        entry.update_password(password.as_str());
    }
    if let Some(notes) = args.notes {
        entry.update_notes(notes);
    }
    if let Some(tags) = args.tags {
        entry.update_tags(parse_tags(Some(tags)));
    }
    let entry_id = entry.entry_id.clone();

    manager.save(&master, &vault)?;

    output::success(&format!("Updated entry {entry_id}"));
    if args.auto {
        if let Some(password) = &new_password {
            output::print_generated_password(password);
        }
    }

    Ok(())
}
