//! End-to-end tests for `keymatrix encode`, `print` and `decode`.

use std::fs;

mod fixtures;
use fixtures::*;

const SCENARIO_BYTES: [u8; 18] = [
    0x01, 0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0x00, 0x05, 0x00, 0x06, 0x00, 0x07,
    0x00, 0x08, 0x00,
];

#[test]
fn test_encode_to_file() {
    let (layout_path, temp_dir) = create_temp_layout_file("1,2,3,4\n5,6,7,8\n");
    let blob_path = temp_dir.path().join("layout.bin");

    let output = run_small(
        temp_dir.path(),
        &[
            "encode",
            "--layout",
            layout_path.to_str().unwrap(),
            "--output",
            blob_path.to_str().unwrap(),
        ],
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(fs::read(&blob_path).unwrap(), SCENARIO_BYTES);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 layer(s), 18 bytes"));
}

#[test]
fn test_encode_hex_dump_to_stdout() {
    let (layout_path, temp_dir) = create_temp_layout_file("1,2,3,4\n5,6,7,8\n");

    let output = run_small(
        temp_dir.path(),
        &["encode", "--layout", layout_path.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "# 1 layers, 18 bytes");
    assert_eq!(
        lines[1],
        "00000000  01 00 01 00 02 00 03 00 04 00 05 00 06 00 07 00"
    );
    assert_eq!(lines[2], "00000010  08 00");
}

#[test]
fn test_encode_invalid_layout_writes_nothing() {
    let (layout_path, temp_dir) = create_temp_layout_file("1,2,3,4,5\n6,7,8\n");
    let blob_path = temp_dir.path().join("layout.bin");

    let output = run_small(
        temp_dir.path(),
        &[
            "encode",
            "--layout",
            layout_path.to_str().unwrap(),
            "--output",
            blob_path.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(!blob_path.exists(), "No blob should be written on failure");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid number of keys on line, actually 5, expected 4"));
}

#[test]
fn test_encode_overflow_reports_missing_comma() {
    let (layout_path, temp_dir) = create_temp_layout_file("12345678901234567890\n");

    let output = run_small(
        temp_dir.path(),
        &["encode", "--layout", layout_path.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("comma missing?"));
    assert!(output.stdout.is_empty(), "Nothing should reach the transport");
}

#[test]
fn test_print_layout() {
    let (layout_path, temp_dir) = create_temp_layout_file(&layout_text(2, 2, 4));

    let output = run_small(
        temp_dir.path(),
        &["print", "--layout", layout_path.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Number of layers: 2"));
    assert!(stdout.contains("Layer 0"));
    assert!(stdout.contains("Layer 1"));
    assert!(stdout.contains("C4"));
    assert!(stdout.contains("R2"));
}

#[test]
fn test_decode_round_trip() {
    let (layout_path, temp_dir) = create_temp_layout_file(&layout_text(1, 2, 4));
    let blob_path = temp_dir.path().join("layout.bin");

    let encode = run_small(
        temp_dir.path(),
        &[
            "encode",
            "--layout",
            layout_path.to_str().unwrap(),
            "--output",
            blob_path.to_str().unwrap(),
        ],
    );
    assert_eq!(encode.status.code(), Some(0));

    let decode = run_small(
        temp_dir.path(),
        &["decode", "--input", blob_path.to_str().unwrap()],
    );
    let print = run_small(
        temp_dir.path(),
        &["print", "--layout", layout_path.to_str().unwrap()],
    );

    assert_eq!(decode.status.code(), Some(0));
    assert_eq!(decode.stdout, print.stdout);
}

#[test]
fn test_decode_truncated_blob() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let blob_path = temp_dir.path().join("layout.bin");
    fs::write(&blob_path, &SCENARIO_BYTES[..10]).unwrap();

    let output = run_small(
        temp_dir.path(),
        &["decode", "--input", blob_path.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid blob"));
}
