//! `passkeep show` — display one entry, password masked by default.

use crate::cli::{open_manager, output, prompt_master_password, Cli};
use crate::errors::Result;

/// Execute the `show` command.
pub fn execute(cli: &Cli, id: &str, reveal: bool) -> Result<()> {
    let manager = open_manager(cli)?;
    let master = prompt_master_password()?;
    let vault = manager.load(&master)?;

    let entry = vault.get(id)?;
    output::print_entry_detail(entry, reveal);

    Ok(())
}
