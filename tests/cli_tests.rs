//! Integration tests for the PassKeep CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Interactive prompts are bypassed with the `PASSKEEP_PASSWORD` env
//! var and explicit `--password` flags.  `HOME` is pointed at a temp
//! dir so a lowered KDF iteration count can be injected via config.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MASTER: &str = "StrongMaster!123";

/// Helper: a command wired to a sandboxed home + vault path.
fn passkeep(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("passkeep").expect("binary should exist");
    cmd.env("HOME", home.path())
        .env("PASSKEEP_PASSWORD", MASTER)
        .arg("--vault")
        .arg(home.path().join("vault.sec"));
    cmd
}

/// Helper: a sandboxed home with fast KDF settings for tests.
fn test_home() -> TempDir {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".passkeep");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "kdf_iterations = 1000\n").unwrap();
    home
}

#[test]
fn help_flag_shows_usage() {
    Command::cargo_bin("passkeep")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encrypted password manager"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn version_flag_shows_version() {
    Command::cargo_bin("passkeep")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passkeep"));
}

#[test]
fn list_on_missing_vault_fails_with_hint() {
    let home = test_home();
    passkeep(&home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("passkeep init"));
}

#[test]
fn init_add_list_flow() {
    let home = test_home();

    passkeep(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vault created"));

    // A second init must refuse to overwrite.
    passkeep(&home)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    passkeep(&home)
        .args([
            "add",
            "--service",
            "github",
            "--username",
            "octocat",
            "--password",
            "s3cr3t-pw",
            "--tags",
            "work,dev",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added entry"));

    passkeep(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("github"))
        .stdout(predicate::str::contains("octocat"))
        .stdout(predicate::str::contains("work, dev"));
}

#[test]
fn show_masks_password_unless_revealed() {
    let home = test_home();
    passkeep(&home).arg("init").assert().success();
    passkeep(&home)
        .args([
            "add",
            "--service",
            "github",
            "--username",
            "octocat",
            "--password",
            "very-hidden-pw",
        ])
        .assert()
        .success();

    let id = only_entry_id(&home);

    passkeep(&home)
        .args(["show", "--id", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("very-hidden-pw").not());

    passkeep(&home)
        .args(["show", "--id", &id, "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("very-hidden-pw"));
}

#[test]
fn update_and_delete_flow() {
    let home = test_home();
    passkeep(&home).arg("init").assert().success();
    passkeep(&home)
        .args([
            "add",
            "--service",
            "github",
            "--username",
            "octocat",
            "--password",
            "old-pw-123",
        ])
        .assert()
        .success();

    let id = only_entry_id(&home);

    passkeep(&home)
        .args(["update", "--id", &id, "--password", "new-pw-456"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated entry"));

    passkeep(&home)
        .args(["show", "--id", &id, "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new-pw-456"));

    passkeep(&home)
        .args(["delete", "--id", &id, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    passkeep(&home)
        .args(["show", "--id", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn update_with_nothing_to_do_fails() {
    let home = test_home();
    passkeep(&home).arg("init").assert().success();

    passkeep(&home)
        .args(["update", "--id", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to update"));
}

#[test]
fn wrong_master_password_is_reported() {
    let home = test_home();
    passkeep(&home).arg("init").assert().success();

    let mut cmd = Command::cargo_bin("passkeep").unwrap();
    cmd.env("HOME", home.path())
        .env("PASSKEEP_PASSWORD", "NotTheMaster1")
        .arg("--vault")
        .arg(home.path().join("vault.sec"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wrong master password"));
}

#[test]
fn generate_produces_requested_length() {
    Command::cargo_bin("passkeep")
        .unwrap()
        .args(["generate", "--length", "30"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            out.lines()
                .next()
                .is_some_and(|line| line.trim().chars().count() == 30)
        }));
}

#[test]
fn generate_rejects_short_lengths() {
    Command::cargo_bin("passkeep")
        .unwrap()
        .args(["generate", "--length", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8"));
}

/// Load the vault through the library to fetch the only entry's id.
fn only_entry_id(home: &TempDir) -> String {
    use passkeep::vault::{EnvelopeStore, VaultManager};

    let store = EnvelopeStore::new(home.path().join("vault.sec"));
    let manager = VaultManager::with_iterations(store, 1_000);
    let vault = manager.load(MASTER).expect("load vault");
    vault.list(None)[0].entry_id.clone()
}
