//! Integration tests for the qrecc binary

use std::process::Command;

fn qrecc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_qrecc"))
}

#[test]
fn test_qrecc_help() {
    let output = qrecc().arg("--help").output().expect("Failed to execute qrecc");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Reed-Solomon"));
    assert!(stdout.contains("--ec-bytes"));
}

#[test]
fn test_qrecc_iso_example() {
    let output = qrecc()
        .args(["-n", "10", "10200c566180ec11ec11ec11ec11ec11"])
        .output()
        .expect("Failed to execute qrecc");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        "10200c566180ec11ec11ec11ec11ec11a524d4c1ed36c7872c55"
    );
}

#[test]
fn test_qrecc_ec_only_multiple_blocks() {
    let output = qrecc()
        .args([
            "--ec-only",
            "-n",
            "10",
            "10200c566180ec11ec11ec11ec11ec11",
            "10200c566180ec11ec11ec11ec11ec11",
        ])
        .output()
        .expect("Failed to execute qrecc");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["a524d4c1ed36c7872c55", "a524d4c1ed36c7872c55"]);
}

#[test]
fn test_qrecc_bits_output() {
    let output = qrecc()
        .args(["-n", "2", "--bits", "1"])
        .output()
        .expect("Failed to execute qrecc");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // 0x01 * x^2 mod (x^2 + 3x + 2) = 3x + 2, so "1" 03 02 packed and zero-padded
    assert_eq!(stdout.trim(), "818100");
}

#[test]
fn test_qrecc_hex_flag() {
    let output = qrecc()
        .args(["-n", "10", "--hex", "10200c566180ec11ec11ec11ec11ec11"])
        .output()
        .expect("Failed to execute qrecc");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        "10200c566180ec11ec11ec11ec11ec11a524d4c1ed36c7872c55"
    );
}

#[test]
fn test_qrecc_blocks_flag() {
    let output = qrecc()
        .args(["-n", "4", "--blocks", "000001", "01"])
        .output()
        .expect("Failed to execute qrecc");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    // Leading zero bytes do not change the remainder
    assert_eq!(lines, ["0000010f367840", "010f367840"]);
}

#[test]
fn test_qrecc_ec_only_sequential() {
    let output = qrecc()
        .args(["--ec-only", "--no-parallel", "-n", "4", "--blocks", "000001", "01"])
        .output()
        .expect("Failed to execute qrecc");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["0f367840", "0f367840"]);
}

#[test]
fn test_qrecc_rejects_two_input_forms() {
    let output = qrecc()
        .args(["-n", "4", "--hex", "01", "--bits", "1"])
        .output()
        .expect("Failed to execute qrecc");

    assert!(!output.status.success());
}

#[test]
fn test_qrecc_rejects_non_numeric_threads() {
    let output = qrecc()
        .args(["-n", "4", "-t", "abc", "01"])
        .output()
        .expect("Failed to execute qrecc");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--threads"));
}

#[test]
fn test_qrecc_rejects_invalid_ec_count() {
    let output = qrecc()
        .args(["-n", "1", "ff"])
        .output()
        .expect("Failed to execute qrecc");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid error correction byte count"));
}

#[test]
fn test_qrecc_rejects_bad_hex() {
    let output = qrecc()
        .args(["-n", "4", "zz"])
        .output()
        .expect("Failed to execute qrecc");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid hex data block"));
}
