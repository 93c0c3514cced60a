//! `passkeep init` — create a new empty vault.

use crate::cli::{open_manager, output, prompt_new_master_password, Cli};
use crate::errors::{PassKeepError, Result};

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let manager = open_manager(cli)?;

    if manager.store().exists() {
        output::tip("Use `passkeep add` to put entries into the existing vault.");
        return Err(PassKeepError::VaultAlreadyExists(
            manager.store().path().to_path_buf(),
        ));
    }

    let password = prompt_new_master_password()?;
    manager.init(&password)?;

    output::success(&format!(
        "Vault created at {}",
        manager.store().path().display()
    ));
    output::tip("Run `passkeep add --service <name> --username <user>` to add an entry.");
    output::tip("Run `passkeep list` to see all entries.");

    Ok(())
}
