//! Script execution through the binary

use super::{output_lines, run_pushbridge};
use crate::common::script_file;
use serde_json::json;

#[test]
fn test_early_message_replayed_on_attach() {
    let script = script_file(
        r#"[
            {"step": "message", "id": "m-1", "data": {"k": "v"}},
            {"step": "attach"}
        ]"#,
    );
    let output = run_pushbridge(&[], Some(script.path()));
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    assert_eq!(
        output_lines(&output),
        vec![
            json!({ "buffered": "m-1" }),
            json!({ "attached": 1, "replayed": true }),
            json!({
                "event": "message-received",
                "generation": 1,
                "retained": true,
                "payload": { "id": "m-1", "data": { "k": "v" } }
            }),
        ]
    );
}

#[test]
fn test_register_uses_token_flags() {
    let script = script_file(r#"[{"step": "attach"}, {"step": "register"}]"#);

    let output = run_pushbridge(&["--token", "abc"], Some(script.path()));
    let lines = output_lines(&output);
    assert_eq!(lines[1]["event"], json!("token"));
    assert_eq!(lines[1]["payload"], json!({ "value": "abc" }));

    let output = run_pushbridge(&["--token-error", "SERVICE_NOT_AVAILABLE"], Some(script.path()));
    let lines = output_lines(&output);
    assert_eq!(lines[1]["event"], json!("token-error"));
    assert_eq!(lines[1]["payload"], json!({ "error": "SERVICE_NOT_AVAILABLE" }));
}

#[test]
fn test_inventory_steps() {
    let script = script_file(
        r#"[
            {"step": "list"},
            {"step": "remove", "notifications": [{"id": 3, "tag": 9}]},
            {"step": "remove_all"}
        ]"#,
    );
    let output = run_pushbridge(&[], Some(script.path()));
    assert!(output.status.success());

    let lines = output_lines(&output);
    assert_eq!(lines[0], json!({ "delivered": [] }));
    assert_eq!(lines[1]["removed"], json!(false));
    assert_eq!(lines[2], json!({ "removed_all": true }));
}

#[test]
fn test_malformed_script_fails() {
    let script = script_file(r#"{"step": "attach"}"#);
    let output = run_pushbridge(&[], Some(script.path()));
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_script_fails() {
    let output = run_pushbridge(&[], None);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_version_flag() {
    let output = run_pushbridge(&["--version"], None);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("pushbridge "));
}
