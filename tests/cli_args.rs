//! Tests for the command-line surface of the binary.

mod common;

use common::temp_config;
use std::process::Command;

fn cardlister_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cardlister"))
}

#[test]
fn test_help_lists_overrides() {
    let output = cardlister_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("--page-size"));
    assert!(stdout.contains("--debounce-ms"));
}

#[test]
fn test_version_flag() {
    let output = cardlister_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_page_size_exits_with_error() {
    let (_dir, path) = temp_config("");
    let output = cardlister_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--page-size")
        .arg("0")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("page_size must be between 1 and 100"));
}

#[test]
fn test_invalid_base_url_exits_with_error() {
    let (_dir, path) = temp_config("");
    let output = cardlister_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--base-url")
        .arg("ftp://cards.example")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported URL scheme"));
}

#[test]
fn test_broken_config_file_exits_with_error() {
    let (_dir, path) = temp_config("[search\n");
    let output = cardlister_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
}
