//! Integration tests for config command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::textiq_cmd;

#[test]
fn test_config_get_default() {
    let home = TempDir::new().unwrap();

    textiq_cmd(home.path())
        .args(["config", "hashtag_preview"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_config_set_writes_file() {
    let home = TempDir::new().unwrap();

    textiq_cmd(home.path())
        .args(["config", "hashtag_preview", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set hashtag_preview = 3"));

    let content = fs::read_to_string(home.path().join("config.toml")).unwrap();
    assert!(content.contains("hashtag_preview = 3"));
    assert!(!content.contains("clipboard"));

    textiq_cmd(home.path())
        .args(["config", "hashtag_preview"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_config_list() {
    let home = TempDir::new().unwrap();

    textiq_cmd(home.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clipboard = "))
        .stdout(predicate::str::contains("hashtag_preview = 5"));
}

#[test]
fn test_config_unknown_key() {
    let home = TempDir::new().unwrap();

    textiq_cmd(home.path())
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'colour'"));
}

#[test]
fn test_config_invalid_value() {
    let home = TempDir::new().unwrap();

    textiq_cmd(home.path())
        .args(["config", "hashtag_preview", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid hashtag_preview"));

    assert!(!home.path().join("config.toml").exists());
}

#[test]
fn test_malformed_config_file() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("config.toml"), "hashtag_preview = [").unwrap();

    textiq_cmd(home.path())
        .args(["config", "--list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config.toml"));
}

#[test]
fn test_no_command_prints_hint() {
    let home = TempDir::new().unwrap();

    textiq_cmd(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --help"));
}
