//! Integration tests for the CLI binary.
//!
//! These tests run the compiled `loc` binary and exercise argument
//! parsing, config plumbing, and offline failure modes. Anything that
//! needs a server is covered by the wiremock and mock-inventory suites.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary under test, with API environment overrides stripped so
/// the host environment cannot leak in.
fn loc() -> Command {
    let mut cmd = Command::cargo_bin("loc").unwrap();
    cmd.env_remove("INVENTREE_API_TOKEN")
        .env_remove("INVENTREE_BASE_URL")
        .env_remove("LOCSMITH_CONFIG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    loc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("locations"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("move"))
        .stdout(predicate::str::contains("backup"));
}

#[test]
fn unknown_subcommand_fails() {
    loc().arg("frobnicate").assert().failure();
}

#[test]
fn create_requires_parent_and_type() {
    loc()
        .arg("create")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--parent"));
}

#[test]
fn completion_bash_emits_script() {
    loc()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn config_set_then_get_roundtrips() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");

    loc()
        .args(["--config", config_path.to_str().unwrap()])
        .args(["config", "set", "api.base_url", "https://inv.example.com/api/"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Set api.base_url = https://inv.example.com/api/",
        ));

    loc()
        .args(["--config", config_path.to_str().unwrap()])
        .args(["config", "get", "api.base_url"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://inv.example.com/api/"));
}

#[test]
fn config_set_rejects_unknown_key() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");

    loc()
        .args(["--config", config_path.to_str().unwrap()])
        .args(["config", "set", "nonsense.key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn config_set_rejects_invalid_base_url() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");

    // Missing trailing slash fails validation at write time.
    loc()
        .args(["--config", config_path.to_str().unwrap()])
        .args(["config", "set", "api.base_url", "https://inv.example.com/api"])
        .assert()
        .failure();
}

#[test]
fn config_list_masks_the_token() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");

    loc()
        .args(["--config", config_path.to_str().unwrap()])
        .args(["config", "set", "api.token", "inv-secret-token"])
        .assert()
        .success();

    loc()
        .args(["--config", config_path.to_str().unwrap()])
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api.token = (set)"))
        .stdout(predicate::str::contains("inv-secret-token").not());
}

#[test]
fn locations_without_base_url_explains_setup() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");

    loc()
        .args(["--config", config_path.to_str().unwrap()])
        .args(["config", "set", "backup.host", "somewhere"])
        .assert()
        .success();

    loc()
        .args(["--config", config_path.to_str().unwrap()])
        .arg("locations")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No API base URL configured"));
}

#[test]
fn backup_without_config_explains_setup() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");

    loc()
        .args(["--config", config_path.to_str().unwrap()])
        .args(["config", "set", "api.base_url", "https://inv.example.com/api/"])
        .assert()
        .success();

    loc()
        .args(["--config", config_path.to_str().unwrap()])
        .arg("backup")
        .assert()
        .failure()
        .stderr(predicate::str::contains("[backup]"));
}
