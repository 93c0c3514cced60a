//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::VaultEntry;

/// Print a green success message.
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning.
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message.
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint.
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of entries (ID, Service, Username, Tags, Updated).
pub fn print_entries_table(entries: &[&VaultEntry]) {
    if entries.is_empty() {
        info("No entries found.");
        tip("Run `passkeep add --service <name> --username <user>` to add one.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Service", "Username", "Tags", "Updated"]);

    for entry in entries {
        let tags = if entry.tags.is_empty() {
            "-".to_string()
        } else {
            entry.tags.join(", ")
        };
        table.add_row(vec![
            entry.entry_id.clone(),
            entry.service.clone(),
            entry.username.clone(),
            tags,
            entry.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }

    println!("{table}");
}

/// Print the full detail view of one entry.  The password is masked
/// unless `reveal` is set.
pub fn print_entry_detail(entry: &VaultEntry, reveal: bool) {
    let password = if reveal {
        entry.password.clone()
    } else {
        "\u{25cf}".repeat(12)
    };
    let tags = if entry.tags.is_empty() {
        "-".to_string()
    } else {
        entry.tags.join(", ")
    };
    let notes = if entry.notes.is_empty() {
        "-"
    } else {
        entry.notes.as_str()
    };

    println!("{}", style(format!("Entry {}", entry.entry_id)).bold());
    println!("  Service:  {}", style(&entry.service).bold());
    println!("  Username: {}", entry.username);
    println!("  Password: {password}");
    println!("  Tags:     {tags}");
    println!("  Notes:    {notes}");
    println!("  Created:  {}", entry.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!("  Updated:  {}", entry.updated_at.format("%Y-%m-%d %H:%M:%S"));
}

/// Print a freshly generated password, set off from normal output so it
/// is easy to copy.
pub fn print_generated_password(password: &str) {
    println!("{}", style(password).yellow().bold());
    tip("Copy it somewhere safe — it is not shown again.");
}
