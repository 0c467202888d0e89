//! Tests for the in-memory collaborators and script runner

use super::*;
use crate::bridge::api::{ListenerRegistry, PLUGIN_NAME};
use crate::coordinator::api::PushConfig;
use crate::messaging::api::RemoteMessage;
use serde_json::json;

#[test]
fn test_memory_host_resolves_only_current_instance_by_name() {
    let host = MemoryHost::new();
    assert!(host.resolve(PLUGIN_NAME).is_none());

    let first = host.attach();
    let second = host.attach();
    assert_eq!(first.generation(), 1);
    assert_eq!(second.generation(), 2);
    assert!(host.resolve(PLUGIN_NAME).is_some());
    assert!(host.resolve("Camera").is_none());

    host.detach();
    assert!(host.resolve(PLUGIN_NAME).is_none());
}

#[test]
fn test_memory_tray_show_replaces_same_slot() {
    let runner = ScriptRunner::new(
        &PushConfig::with_presentation_options(["alert"]),
        ScriptedProvider::with_token("t"),
    );
    let message = |id: &str| {
        RemoteMessage::new(id).with_notification(crate::messaging::api::DisplayPayload {
            title: Some(id.to_string()),
            ..Default::default()
        })
    };

    runner.host.attach();
    runner.coordinator().on_message(message("first"));
    runner.coordinator().on_message(message("second"));

    let delivered = runner.tray.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].title.as_deref(), Some("second"));
    assert_eq!(runner.tray.rendered().len(), 2);
}

#[test]
fn test_parse_script_steps() {
    let steps = ScriptRunner::parse(
        r#"[
            {"step": "message", "id": "m-1", "data": {"k": "v"}},
            {"step": "attach"},
            {"step": "intent", "extras": {"google.message_id": 5}},
            {"step": "remove", "notifications": [{"id": 1}]},
            {"step": "advance", "seconds": 2},
            {"step": "remove_all"}
        ]"#,
    )
    .expect("script should parse");

    assert_eq!(steps.len(), 6);
    assert_eq!(
        steps[0],
        Step::Message {
            message: RemoteMessage::new("m-1").with_data("k", "v")
        }
    );
    assert_eq!(steps[1], Step::Attach);
    assert_eq!(steps[4], Step::Advance { seconds: 2 });
}

#[test]
fn test_parse_rejects_unknown_step() {
    let result = ScriptRunner::parse(r#"[{"step": "explode"}]"#);
    assert!(matches!(result, Err(ScriptError::Parse(_))));
}

#[tokio::test]
async fn test_run_script_replays_early_message_on_attach() {
    let runner = ScriptRunner::new(&PushConfig::default(), ScriptedProvider::with_token("t"));
    let steps = ScriptRunner::parse(
        r#"[
            {"step": "message", "id": "m-1"},
            {"step": "message", "id": "m-2"},
            {"step": "attach"}
        ]"#,
    )
    .unwrap();

    let output = runner.run(&steps).await.expect("script should run");

    assert_eq!(
        output,
        vec![
            json!({ "buffered": "m-1" }),
            json!({ "buffered": "m-2" }),
            json!({ "attached": 1, "replayed": true }),
            json!({
                "event": "message-received",
                "generation": 1,
                "retained": true,
                "payload": { "id": "m-2", "data": {} }
            }),
        ]
    );
}

#[tokio::test]
async fn test_run_script_reports_malformed_removal_without_failing() {
    let runner = ScriptRunner::new(&PushConfig::default(), ScriptedProvider::with_token("t"));
    let steps = ScriptRunner::parse(r#"[{"step": "remove", "notifications": [{}]}]"#).unwrap();

    let output = runner.run(&steps).await.unwrap();
    assert_eq!(output.len(), 1);
    assert_eq!(output[0]["removed"], json!(false));
    assert!(output[0]["error"]
        .as_str()
        .unwrap()
        .contains("missing required field 'id'"));
}

#[tokio::test]
async fn test_run_script_register_and_channels() {
    let runner = ScriptRunner::new(&PushConfig::default(), ScriptedProvider::failing("TOO_MANY_REGISTRATIONS"));
    let steps = ScriptRunner::parse(
        r#"[
            {"step": "attach"},
            {"step": "register"},
            {"step": "create_channel", "channel": {"id": "news", "name": "News"}},
            {"step": "list_channels"},
            {"step": "delete_channel", "id": "missing"}
        ]"#,
    )
    .unwrap();

    let output = runner.run(&steps).await.unwrap();

    assert!(output.contains(&json!({
        "event": "token-error",
        "generation": 1,
        "retained": true,
        "payload": { "error": "TOO_MANY_REGISTRATIONS" }
    })));
    assert!(output.contains(&json!({ "channel_created": "news" })));
    assert!(output.contains(&json!({ "channels": [{ "id": "news", "name": "News" }] })));
    assert!(output.contains(&json!({ "error": "Channel not found: missing" })));
    assert!(runner.provider.auto_init_enabled());
}

#[tokio::test]
async fn test_run_script_reports_channel_listing_failure_and_continues() {
    let runner = ScriptRunner::new(&PushConfig::default(), ScriptedProvider::with_token("t"));
    runner.channels.fail_with("service down");
    let steps = ScriptRunner::parse(
        r#"[
            {"step": "list_channels"},
            {"step": "remove_all"}
        ]"#,
    )
    .unwrap();

    let output = runner.run(&steps).await.expect("script should keep running");

    assert_eq!(
        output,
        vec![
            json!({ "error": "Channel operation rejected: service down" }),
            json!({ "removed_all": true }),
        ]
    );
}

#[tokio::test]
async fn test_provider_outcome_can_change_between_registrations() {
    let runner = ScriptRunner::new(&PushConfig::default(), ScriptedProvider::with_token("first"));
    runner.host.attach();

    runner.coordinator().register().unwrap().await.unwrap();
    runner
        .provider
        .set_outcome(Err("MISSING_INSTANCEID_SERVICE".to_string()));
    runner.coordinator().register().unwrap().await.unwrap();
    runner.provider.set_outcome(Ok("second".to_string()));
    runner.coordinator().register().unwrap().await.unwrap();

    let payloads: Vec<_> = runner
        .host
        .dispatched()
        .into_iter()
        .map(|event| (event.name, event.payload))
        .collect();
    assert_eq!(
        payloads,
        vec![
            ("token".to_string(), json!({ "value": "first" })),
            ("token-error".to_string(), json!({ "error": "MISSING_INSTANCEID_SERVICE" })),
            ("token".to_string(), json!({ "value": "second" })),
        ]
    );
    assert_eq!(runner.provider.token_requests(), 3);
}
