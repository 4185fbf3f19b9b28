//! Tests for CLI argument parsing against the built binary.
//!
//! Only paths that exit before the terminal is taken over are exercised.

use std::process::Command;

use tempfile::TempDir;

fn userview_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_userview"))
}

#[test]
fn test_help_lists_options() {
    let output = userview_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--user-id", "--delay-ms", "--greeting", "--theme", "--config"] {
        assert!(stdout.contains(flag), "missing {} in help", flag);
    }
}

#[test]
fn test_version_flag() {
    let output = userview_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_non_numeric_user_id_is_rejected() {
    let output = userview_cmd()
        .args(["--user-id", "abc"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--user-id"));
}

#[test]
fn test_invalid_theme_is_rejected() {
    let output = userview_cmd()
        .args(["--theme", "sepia"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn test_zero_user_id_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let output = userview_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("missing.toml"))
        .args(["--user-id", "0"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"));
}

#[test]
fn test_broken_config_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[profile\n").unwrap();

    let output = userview_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not load"));
    assert!(stderr.contains("Failed to parse config file"));
}
