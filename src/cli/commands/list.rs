//! `passkeep list` — display entries in a table.

use crate::cli::{open_manager, output, prompt_master_password, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli, filter: Option<&str>) -> Result<()> {
    let manager = open_manager(cli)?;
    let master = prompt_master_password()?;
    let vault = manager.load(&master)?;

    let entries = vault.list(filter);
    output::info(&format!("{} entries found", entries.len()));
    output::print_entries_table(&entries);

    Ok(())
}
