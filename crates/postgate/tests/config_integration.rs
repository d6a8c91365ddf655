//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, precedence, and
//! that configured thresholds and vocabulary actually change verdicts.
//! They use `info --json` and `check --json` to assert real values, not
//! just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run a subcommand with `--json` from a directory and parse the output.
fn run_json(dir: &Path, args: &[&str]) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap()])
        .args(args)
        .arg("--json")
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

fn info_json(dir: &Path) -> Value {
    run_json(dir, &["info"])
}

fn verdict(dir: &Path, channel: &str, text: &str) -> Value {
    run_json(dir, &["check", channel, text])["verdict"].clone()
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert!(json["config"]["config_file"].is_null());
    assert_eq!(json["config"]["suggest_min_length"], 8);
    assert_eq!(json["config"]["debounce_ms"], 400);
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".postgate.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".postgate.toml"), "{reported}");
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("drafts").join("q3");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join(".postgate.toml"), r#"log_level = "warn""#).unwrap();

    assert_eq!(info_json(&sub_dir)["config"]["log_level"], "warn");
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".postgate.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join("postgate.toml"), r#"log_level = "error""#).unwrap();

    assert_eq!(info_json(tmp.path())["config"]["log_level"], "error");
}

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".postgate.yaml"), "debounce_ms: 500\n").unwrap();

    assert_eq!(info_json(tmp.path())["config"]["debounce_ms"], 500);
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".postgate.json"),
        r#"{"suggest_min_length": 12}"#,
    )
    .unwrap();

    assert_eq!(info_json(tmp.path())["config"]["suggest_min_length"], 12);
}

#[test]
fn debounce_is_clamped() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".postgate.toml"), "debounce_ms = 5000\n").unwrap();

    assert_eq!(info_json(tmp.path())["config"]["debounce_ms"], 600);
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".postgate.toml"), r#"log_level = "debug""#).unwrap();
    let explicit = tmp.path().join("ci.toml");
    fs::write(&explicit, r#"log_level = "error""#).unwrap();

    let json = run_json(
        tmp.path(),
        &["--config", explicit.to_str().unwrap(), "info"],
    );
    assert_eq!(json["config"]["log_level"], "error");
}

#[test]
fn env_var_overrides_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".postgate.toml"), "suggest_min_length = 12\n").unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .env("POSTGATE_SUGGEST_MIN_LENGTH", "20")
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["suggest_min_length"], 20);
}

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let work = repo.join("posts");
    fs::create_dir_all(&work).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(tmp.path().join(".postgate.toml"), r#"log_level = "error""#).unwrap();

    let json = info_json(&work);
    assert_eq!(json["config"]["log_level"], "info");
    assert!(json["config"]["config_file"].is_null());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".postgate.toml"), "log_level = [broken").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn invalid_vocabulary_pattern_names_list() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".postgate.toml"),
        "[vocabulary]\ncode_patterns = [\"(unclosed\"]\n",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "check", "topic", "remote work tips"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("code_patterns"));
}

#[test]
fn inverted_thresholds_are_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".postgate.toml"),
        "[thresholds.audience]\nmin_length = 50\nmax_length = 20\n",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "check", "audience", "Startup Founders"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid thresholds for audience"));
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".postgate.toml"),
        "log_level = \"warn\"\nfavourite_color = \"teal\"\n",
    )
    .unwrap();

    assert_eq!(info_json(tmp.path())["config"]["log_level"], "warn");
}

// =============================================================================
// Configuration changes verdicts
// =============================================================================

#[test]
fn threshold_override_changes_verdict() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(verdict(tmp.path(), "topic", "remote work"), "safe");

    fs::write(
        tmp.path().join(".postgate.toml"),
        "[thresholds.topic]\nmin_length = 20\n",
    )
    .unwrap();
    assert_eq!(verdict(tmp.path(), "topic", "remote work"), "too_short");
}

#[test]
fn extended_vocabulary_adds_terms() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(verdict(tmp.path(), "audience", "parents"), "off_topic");

    fs::write(
        tmp.path().join(".postgate.toml"),
        "[vocabulary]\naudience_terms = [\"parents\"]\n",
    )
    .unwrap();
    assert_eq!(verdict(tmp.path(), "audience", "parents"), "safe");
    // built-ins still apply in extend mode
    assert_eq!(
        verdict(tmp.path(), "audience", "Software Engineers"),
        "safe"
    );
}

#[test]
fn replaced_vocabulary_drops_builtins() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".postgate.yaml"),
        "vocabulary:\n  mode: replace\n  off_topic_keywords:\n    - payroll\n",
    )
    .unwrap();

    assert_eq!(
        verdict(tmp.path(), "topic", "best pizza recipe for dinner"),
        "safe"
    );
    assert_eq!(
        verdict(tmp.path(), "topic", "payroll tips for small teams"),
        "off_topic"
    );
}
