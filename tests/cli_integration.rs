//! CLI Integration Tests
//!
//! End-to-end tests for CLI commands using assert_cmd.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the vigil binary for testing
fn vigil_cmd() -> Command {
    Command::cargo_bin("vigil").unwrap()
}

/// Board fixture plus a config file pointing at it.
fn fixture() -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let board_root = temp.path().join("board");
    common::write_fixture_board(&board_root);

    let config_path = temp.path().join("vigil.toml");
    std::fs::write(&config_path, common::config_toml(&board_root)).unwrap();
    (temp, config_path)
}

#[test]
fn test_version_output() {
    vigil_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vigil"));
}

#[test]
fn test_help_shows_all_commands() {
    vigil_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("pins"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_report_help() {
    vigil_cmd()
        .args(["report", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--period-days"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_report_pretty_output() {
    let (_temp, config_path) = fixture();

    vigil_cmd()
        .args(["report", "-c", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("inspection-model"))
        .stdout(predicate::str::contains("Observations: 3"))
        .stdout(predicate::str::contains("accuracy"));
}

#[test]
fn test_report_json_output_parses() {
    let (_temp, config_path) = fixture();

    let output = vigil_cmd()
        .args(["report", "-c", config_path.to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["summary"]["records"], 3);
    assert_eq!(parsed["rows"].as_array().unwrap().len(), 4);
}

#[test]
fn test_report_writes_out_file() {
    let (temp, config_path) = fixture();
    let out_path = temp.path().join("report.json");

    vigil_cmd()
        .args([
            "report",
            "-c",
            config_path.to_str().unwrap(),
            "--out",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(parsed.get("charts").is_some());
}

#[test]
fn test_report_missing_pin_fails() {
    let (_temp, config_path) = fixture();

    vigil_cmd()
        .args([
            "report",
            "-c",
            config_path.to_str().unwrap(),
            "-m",
            "no-such-model",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_report_rejects_bad_period() {
    let (_temp, config_path) = fixture();

    vigil_cmd()
        .args(["report", "-c", config_path.to_str().unwrap(), "-p", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("period_days"));
}

#[test]
fn test_pins_list() {
    let (_temp, config_path) = fixture();

    vigil_cmd()
        .args(["pins", "list", "-c", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("inspection-model"))
        .stdout(predicate::str::contains("inspection-data"));
}

#[test]
fn test_pins_show_json() {
    let (_temp, config_path) = fixture();

    let output = vigil_cmd()
        .args([
            "pins",
            "show",
            "inspection-model",
            "-c",
            config_path.to_str().unwrap(),
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["pin_type"], "model");
    assert_eq!(parsed["created"], "20240301T120000Z");
}

#[test]
fn test_config_init_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("vigil.toml");

    vigil_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .success();

    assert!(config_path.exists());
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[monitor]"));
}

#[test]
fn test_config_init_no_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("vigil.toml");

    // Create file first
    std::fs::write(&config_path, "existing content").unwrap();

    // Try to overwrite without --force
    vigil_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exists"));
}

#[test]
fn test_config_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("vigil.toml");

    // Create file first
    std::fs::write(&config_path, "existing content").unwrap();

    // Force overwrite
    vigil_cmd()
        .args([
            "config",
            "init",
            "-o",
            config_path.to_str().unwrap(),
            "--force",
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[store]"));
}

#[test]
fn test_completions_bash() {
    vigil_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vigil"));
}

#[test]
fn test_invalid_command() {
    vigil_cmd()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
