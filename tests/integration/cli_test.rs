//! Integration tests for the irclog CLI

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{load_fixture, temp_fixture, write_config, SAMPLE_CONVERTED};

/// irclog command with an isolated, empty config file.
fn irclog(dir: &TempDir) -> Command {
    let config = write_config(dir.path(), "");
    let mut cmd = Command::cargo_bin("irclog").expect("binary should build");
    cmd.env_remove("RUST_LOG").arg("--config").arg(config);
    cmd
}

// ============================================================================
// Convert Command Tests
// ============================================================================

#[test]
fn convert_writes_output_file() {
    let (dir, input) = temp_fixture("sample.log");
    let output = dir.path().join("out.log");

    irclog(&dir)
        .args(["convert", "--log"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), SAMPLE_CONVERTED);
}

#[test]
fn convert_align_and_priv_flags() {
    let (dir, input) = temp_fixture("sample.log");
    let output = dir.path().join("out.log");

    irclog(&dir)
        .args(["convert", "--align", "--priv", "--log"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with(&format!("{}\n", "—".repeat(132))));
    assert!(content.contains("[12:00:01] *bob* waves\n"));
}

#[test]
fn convert_reads_stdin_and_writes_stdout() {
    let dir = TempDir::new().unwrap();

    irclog(&dir)
        .args(["convert", "--log", "-", "--output", "-"])
        .write_stdin(load_fixture("sample.log"))
        .assert()
        .success()
        .stdout(SAMPLE_CONVERTED);
}

#[test]
fn convert_uses_config_file_settings() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        dir.path(),
        "[convert]\ninclude_private = true\n\n[markup]\ncolor_element = \"font\"\n",
    );

    Command::cargo_bin("irclog")
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config)
        .args(["convert", "--log", "-", "--output", "-"])
        .write_stdin(load_fixture("sample.log"))
        .assert()
        .success()
        .stdout(predicate::str::contains("<font class=\"fc4 bc2\">alert</font>"))
        .stdout(predicate::str::contains("*bob* waves"));
}

#[test]
fn convert_missing_input_exits_1() {
    let dir = TempDir::new().unwrap();

    irclog(&dir)
        .args(["convert", "--log", "does-not-exist.log", "--output", "-"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input file not found"))
        .stderr(predicate::str::contains("does-not-exist.log"));
}

#[test]
fn convert_unknown_flag_is_usage_error() {
    let dir = TempDir::new().unwrap();

    irclog(&dir)
        .args(["convert", "--bogus"])
        .assert()
        .code(2);
}

#[test]
fn convert_verbose_logs_summary() {
    let dir = TempDir::new().unwrap();

    irclog(&dir)
        .args(["-v", "convert", "--log", "-", "--output", "-"])
        .write_stdin("hello\n")
        .assert()
        .success()
        .stdout("hello\n")
        .stderr(predicate::str::contains("Conversion finished"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn config_show_prints_effective_toml() {
    let dir = TempDir::new().unwrap();

    irclog(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[convert]"))
        .stdout(predicate::str::contains("separator_width = 132"))
        .stdout(predicate::str::contains("color_element = \"span\""));
}

#[test]
fn config_path_prints_given_path() {
    let dir = TempDir::new().unwrap();

    irclog(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_show_rejects_missing_explicit_file() {
    Command::cargo_bin("irclog")
        .unwrap()
        .args(["--config", "/nonexistent/irclog.toml", "config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config file"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn completions_bash_mentions_subcommands() {
    let dir = TempDir::new().unwrap();

    irclog(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"));
}
