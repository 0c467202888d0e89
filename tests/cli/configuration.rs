//! Configuration handling through the binary

use super::{output_lines, run_pushbridge};
use crate::common::script_file;
use std::io::Write;

const SHOW_SCRIPT: &str = r#"[
    {"step": "attach"},
    {"step": "message", "id": "m-1", "notification": {"title": "Hi"}},
    {"step": "list"}
]"#;

#[test]
fn test_alert_option_from_config_renders_notification() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "presentation_options = [\"alert\"]").unwrap();
    let script = script_file(SHOW_SCRIPT);

    let output = run_pushbridge(
        &["--config-file", config.path().to_str().unwrap()],
        Some(script.path()),
    );
    assert!(output.status.success());

    let lines = output_lines(&output);
    let listed = lines.last().unwrap();
    assert_eq!(listed["delivered"].as_array().map(Vec::len), Some(1));
    assert_eq!(listed["delivered"][0]["title"], "Hi");
}

#[test]
fn test_without_alert_option_nothing_is_shown() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[plugins.PushNotifications]\npresentationOptions = [\"badge\"]").unwrap();
    let script = script_file(SHOW_SCRIPT);

    let output = run_pushbridge(
        &["--config-file", config.path().to_str().unwrap()],
        Some(script.path()),
    );
    let lines = output_lines(&output);
    assert_eq!(lines.last().unwrap()["delivered"], serde_json::json!([]));
    assert!(lines.iter().any(|l| l["event"] == "message-received"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let script = script_file("[]");

    let output = run_pushbridge(
        &["--config-file", missing.to_str().unwrap()],
        Some(script.path()),
    );
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_invalid_config_file_fails() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "presentation_options = [").unwrap();
    let script = script_file("[]");

    let output = run_pushbridge(
        &["--config-file", config.path().to_str().unwrap()],
        Some(script.path()),
    );
    assert!(!output.status.success());
}
