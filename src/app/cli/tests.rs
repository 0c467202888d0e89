//! Tests for argument parsing, configuration loading and display

use super::args::{Args, DEFAULT_TOKEN};
use super::config::{load_config_file, resolve_config_path};
use super::display::format_output_line;
use crate::app::error::AppError;
use crate::core::error_handling::ContextualError;
use clap::Parser;
use serde_json::json;
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("pushbridge").chain(args.iter().copied()))
        .expect("arguments should parse")
}

#[test]
fn test_defaults() {
    let args = parse(&["script.json"]);
    assert_eq!(args.script, Some(PathBuf::from("script.json")));
    assert_eq!(args.token, DEFAULT_TOKEN);
    assert_eq!(args.token_error, None);
    assert_eq!(args.effective_log_level(), "info");
    assert_eq!(args.log_file_path(), None);
    assert!(!args.version);
}

#[test]
fn test_verbosity_and_explicit_level() {
    assert_eq!(parse(&["-vv", "s.json"]).effective_log_level(), "trace");
    assert_eq!(parse(&["-q", "s.json"]).effective_log_level(), "warn");
    assert_eq!(
        parse(&["-vv", "--log-level", "error", "s.json"]).effective_log_level(),
        "error"
    );
}

#[test]
fn test_rejects_unknown_log_format() {
    let result = Args::try_parse_from(["pushbridge", "--log-format", "xml", "s.json"]);
    assert!(result.is_err());
}

#[test]
fn test_color_flags_conflict() {
    let result = Args::try_parse_from(["pushbridge", "--color", "--no-color"]);
    assert!(result.is_err());
}

#[test]
fn test_color_resolution() {
    assert!(parse(&["--color"]).use_color_with(false));
    assert!(!parse(&["--no-color"]).use_color_with(true));
    assert!(parse(&[]).use_color_with(true));
    assert!(!parse(&[]).use_color_with(false));
}

#[test]
fn test_log_file_none_disables_file_logging() {
    assert_eq!(parse(&["--log-file", "none"]).log_file_path(), None);
    assert_eq!(
        parse(&["-f", "push.log"]).log_file_path(),
        Some("push.log".to_string())
    );
}

#[test]
fn test_token_options() {
    let args = parse(&["--token", "abc", "--token-error", "SERVICE_NOT_AVAILABLE"]);
    assert_eq!(args.token, "abc");
    assert_eq!(args.token_error.as_deref(), Some("SERVICE_NOT_AVAILABLE"));
}

#[test]
fn test_explicit_config_file_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = resolve_config_path(Some(missing.clone()), None).unwrap_err();
    assert!(matches!(&err, AppError::ConfigNotFound { path } if *path == missing));
    assert!(err.is_user_actionable());
}

#[test]
fn test_default_config_used_only_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let default_path = dir.path().join("pushbridge.toml");

    assert_eq!(resolve_config_path(None, Some(default_path.clone())).unwrap(), None);

    std::fs::write(&default_path, "").unwrap();
    assert_eq!(
        resolve_config_path(None, Some(default_path.clone())).unwrap(),
        Some(default_path)
    );
}

#[tokio::test]
async fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[plugins.PushNotifications]
presentationOptions = ["alert"]

[plugins.PushNotifications.metadata]
default_notification_icon = 17
"#
    )
    .unwrap();

    let config = load_config_file(file.path()).await.unwrap();
    assert!(config.presentation_policy().shows_alert());
    assert_eq!(config.metadata.default_notification_icon, Some(17));
}

#[tokio::test]
async fn test_load_config_file_reports_parse_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "presentation_options = alert").unwrap();

    let err = load_config_file(file.path()).await.unwrap_err();
    assert!(matches!(err, AppError::ConfigParse { .. }));
    assert!(err.to_string().contains("Error parsing configuration file"));
}

#[test]
#[serial]
fn test_output_lines_are_compact_json_without_color() {
    colored::control::set_override(false);
    let line = json!({ "event": "token", "payload": { "value": "t" } });
    assert_eq!(format_output_line(&line), line.to_string());
    colored::control::unset_override();
}
