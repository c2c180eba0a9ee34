//! Integration tests for the --validate CLI mode.

use std::path::PathBuf;
use std::process::Command;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn lokhook() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lokhook"));
    cmd.env_remove("LOG_FORMAT");
    cmd
}

#[test]
fn validate_valid_config_exits_success() {
    let output = lokhook()
        .args(["--validate", "-c"])
        .arg(fixture_path("config_valid.yaml"))
        .output()
        .expect("Failed to run lokhook");

    assert!(
        output.status.success(),
        "lokhook --validate should exit with code 0 for valid config\nstderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"), "{}", stdout);
    assert!(stdout.contains("Webhook: object_log"), "{}", stdout);
    assert!(stdout.contains("Webhook: all_resources"), "{}", stdout);
    // Webhook tokens never reach the output
    assert!(!stdout.contains("object-log-token"), "{}", stdout);
}

#[test]
fn validate_invalid_webhook_exits_failure() {
    let output = lokhook()
        .args(["--validate", "-c"])
        .arg(fixture_path("config_invalid_webhook.yaml"))
        .output()
        .expect("Failed to run lokhook");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("object_log"), "{}", stderr);
    assert!(stderr.contains("all_resources"), "{}", stderr);
}

#[test]
fn validate_missing_file_exits_failure() {
    let output = lokhook()
        .args(["--validate", "-c", "/nonexistent/lokhook.yaml"])
        .output()
        .expect("Failed to run lokhook");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn missing_command_exits_failure() {
    let output = lokhook()
        .arg("-c")
        .arg(fixture_path("config_minimal.yaml"))
        .output()
        .expect("Failed to run lokhook");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no command given"), "{}", stderr);
}

#[test]
fn report_to_unconfigured_channel_exits_failure() {
    let output = lokhook()
        .arg("-c")
        .arg(fixture_path("config_minimal.yaml"))
        .args([
            "report",
            "--channel",
            "all-resources",
            "--type",
            "Farm",
            "--code",
            "1",
            "--level",
            "1",
            "--location",
            "(1, 1)",
            "--status",
            "Available",
        ])
        .output()
        .expect("Failed to run lokhook");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("all_resources"), "{}", stderr);
}
