//! End-to-end tests driving the compiled `awtrix3` binary.
//!
//! Every command runs against an injected config directory so the suite never
//! touches the user's real configuration and never needs a reachable display.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn awtrix3(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("awtrix3").unwrap();
    cmd.env("AWTRIX3_CONFIG_DIR", config_dir);
    cmd.env_remove("AWTRIX3_DEVICE");
    cmd
}

fn fresh_config_dir() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("awtrix3");
    (tmp, dir)
}

#[test]
fn test_version_contains_semver() {
    let (_tmp, dir) = fresh_config_dir();
    awtrix3(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_subcommand() {
    let (_tmp, dir) = fresh_config_dir();
    awtrix3(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_identifies_the_tool() {
    let (_tmp, dir) = fresh_config_dir();
    awtrix3(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Modern CLI for controlling AWTRIX3 LED matrix displays",
        ));
}

#[test]
fn test_device_list_creates_config_dir() {
    let (_tmp, dir) = fresh_config_dir();
    assert!(!dir.exists());

    awtrix3(&dir)
        .args(["device", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No devices configured"));

    assert!(dir.exists());
    assert!(dir.join("devices.json").exists());

    // Repeat invocation is idempotent and still succeeds.
    awtrix3(&dir).args(["device", "list"]).assert().success();
    assert!(dir.exists());
}

#[test]
fn test_device_add_then_list_shows_device() {
    let (_tmp, dir) = fresh_config_dir();

    awtrix3(&dir)
        .args(["device", "add", "foo", "1.2.3.4:80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added device 'foo'"));

    awtrix3(&dir)
        .args(["device", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("foo").and(predicate::str::contains("1.2.3.4:80")));
}

#[test]
fn test_duplicate_device_add_fails() {
    let (_tmp, dir) = fresh_config_dir();

    awtrix3(&dir)
        .args(["device", "add", "foo", "1.2.3.4:80"])
        .assert()
        .success();

    awtrix3(&dir)
        .args(["device", "add", "foo", "5.6.7.8:80"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_remove_unknown_device_fails() {
    let (_tmp, dir) = fresh_config_dir();

    awtrix3(&dir)
        .args(["device", "remove", "ghost"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not configured"));
}

#[test]
fn test_add_remove_roundtrip() {
    let (_tmp, dir) = fresh_config_dir();

    awtrix3(&dir)
        .args(["device", "add", "foo", "1.2.3.4"])
        .assert()
        .success();
    awtrix3(&dir)
        .args(["device", "remove", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed device 'foo'"));
    awtrix3(&dir)
        .args(["device", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No devices configured"));
}

#[test]
fn test_invalid_address_is_rejected() {
    let (_tmp, dir) = fresh_config_dir();

    awtrix3(&dir)
        .args(["device", "add", "foo", "not a host"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid device address"));
}

#[test]
fn test_device_show_prints_details() {
    let (_tmp, dir) = fresh_config_dir();

    awtrix3(&dir)
        .args(["device", "add", "kitchen", "192.168.1.100"])
        .assert()
        .success();

    awtrix3(&dir)
        .args(["device", "show", "kitchen"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("192.168.1.100")
                .and(predicate::str::contains("Default: yes")),
        );
}

#[test]
fn test_set_default_switches_device() {
    let (_tmp, dir) = fresh_config_dir();

    awtrix3(&dir)
        .args(["device", "add", "a", "1.1.1.1"])
        .assert()
        .success();
    awtrix3(&dir)
        .args(["device", "add", "b", "2.2.2.2"])
        .assert()
        .success();

    awtrix3(&dir)
        .args(["device", "set-default", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default device is now 'b'"));

    awtrix3(&dir)
        .args(["device", "set-default", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not configured"));
}

#[test]
fn test_corrupt_registry_reports_recovery_hint() {
    let (_tmp, dir) = fresh_config_dir();

    awtrix3(&dir).args(["device", "list"]).assert().success();
    std::fs::write(dir.join("devices.json"), "{broken").unwrap();

    awtrix3(&dir)
        .args(["device", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("corrupt").and(predicate::str::contains("delete")));
}

#[test]
fn test_control_command_without_device_is_usage_error() {
    let (_tmp, dir) = fresh_config_dir();

    awtrix3(&dir)
        .args(["notify", "hello"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--device"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let (_tmp, dir) = fresh_config_dir();
    awtrix3(&dir).arg("frobnicate").assert().failure().code(2);
}

#[test]
fn test_completions_generate_for_common_shells() {
    let (_tmp, dir) = fresh_config_dir();
    for shell in ["bash", "zsh", "fish"] {
        awtrix3(&dir)
            .args(["completions", shell])
            .assert()
            .success()
            .stdout(predicate::str::is_empty().not());
    }
}
