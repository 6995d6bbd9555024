//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the keymatrix binary
pub fn keymatrix_bin() -> &'static str {
    env!("CARGO_BIN_EXE_keymatrix")
}

/// Builds layout text with `layers` layers of `rows x cols` keys.
///
/// Key codes count up from 1 across the whole layout, one row per line.
pub fn layout_text(layers: usize, rows: usize, cols: usize) -> String {
    let mut text = String::new();
    let mut next = 1;
    for _ in 0..layers {
        for _ in 0..rows {
            let row: Vec<String> = (0..cols)
                .map(|_| {
                    let key = next.to_string();
                    next += 1;
                    key
                })
                .collect();
            text.push_str(&row.join(","));
            text.push('\n');
        }
        text.push('\n');
    }
    text
}

/// Writes `content` to a layout file in a fresh temp directory.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn create_temp_layout_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("layout.txt");
    fs::write(&path, content).expect("Failed to write layout file");
    (path, temp_dir)
}

/// Runs keymatrix with a 2x4 geometry and an isolated config path.
pub fn run_small(dir: &Path, args: &[&str]) -> Output {
    let config = dir.join("no-config.toml");
    Command::new(keymatrix_bin())
        .args([
            "--config",
            config.to_str().unwrap(),
            "--rows",
            "2",
            "--cols",
            "4",
        ])
        .args(args)
        .output()
        .expect("Failed to execute command")
}
