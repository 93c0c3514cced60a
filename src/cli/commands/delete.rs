//! `passkeep delete` — remove an entry permanently.

use dialoguer::Confirm;

use crate::cli::{open_manager, output, prompt_master_password, Cli};
use crate::errors::{PassKeepError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, id: &str, force: bool) -> Result<()> {
    let manager = open_manager(cli)?;
    let master = prompt_master_password()?;
    let mut vault = manager.load(&master)?;

    // Resolve the entry before prompting so a typo fails fast.
    let (service, username) = {
        let entry = vault.get(id)?;
        (entry.service.clone(), entry.username.clone())
    };

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {service} / {username}?"))
            .default(false)
            .interact()
            .map_err(|e| PassKeepError::CommandFailed(format!("confirmation: {e}")))?;
        if !confirmed {
            return Err(PassKeepError::UserCancelled);
        }
    }

    let removed = vault.delete(id)?;
    manager.save(&master, &vault)?;

    output::success(&format!(
        "Deleted {} / {} ({})",
        removed.service, removed.username, removed.entry_id
    ));

    Ok(())
}
