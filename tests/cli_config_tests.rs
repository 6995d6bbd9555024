//! End-to-end tests for `keymatrix config`.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn run_with_config(config_path: &Path, args: &[&str]) -> Output {
    Command::new(keymatrix_bin())
        .args(["--config", config_path.to_str().unwrap()])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_config_set_persists_geometry() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let output = run_with_config(
        &config_path,
        &["--rows", "1", "--cols", "3", "config", "set"],
    );
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration updated successfully."));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("rows = 1"));
    assert!(content.contains("cols = 3"));

    let output = run_with_config(&config_path, &["config", "show", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(result["geometry"]["rows"], 1);
    assert_eq!(result["geometry"]["cols"], 3);
    assert_eq!(result["geometry"]["max_layers"], 6);
}

#[test]
fn test_stored_geometry_is_used_by_check() {
    let (layout_path, temp_dir) = create_temp_layout_file("1,2,3\n4,5,6\n");
    let config_path = temp_dir.path().join("config.toml");

    let output = run_with_config(
        &config_path,
        &["--rows", "1", "--cols", "3", "config", "set"],
    );
    assert_eq!(output.status.code(), Some(0));

    let output = run_with_config(
        &config_path,
        &["check", "--layout", layout_path.to_str().unwrap(), "--json"],
    );
    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(result["layers"], 2);
}

#[test]
fn test_config_set_keeps_unmentioned_values() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[geometry]\nrows = 4\ncols = 5\nmax_layers = 2\n").unwrap();

    let output = run_with_config(&config_path, &["--max-layers", "3", "config", "set"]);
    assert_eq!(output.status.code(), Some(0));

    let output = run_with_config(&config_path, &["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("KeyMatrix configuration"));
    assert!(stdout.contains("Rows:       4"));
    assert!(stdout.contains("Columns:    5"));
    assert!(stdout.contains("Max layers: 3"));
}

#[test]
fn test_config_set_requires_an_option() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let output = run_with_config(&config_path, &["config", "set"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("At least one configuration option"));
    assert!(!config_path.exists());
}

#[test]
fn test_config_set_rejects_invalid_geometry() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let output = run_with_config(&config_path, &["--rows", "0", "config", "set"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid geometry"));
    assert!(!config_path.exists(), "Nothing should be saved");
}
