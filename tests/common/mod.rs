//! Shared fixtures for integration tests

#![allow(dead_code)]

use pushbridge::bridge::api::ListenerInstance;
use pushbridge::coordinator::api::PushConfig;
use pushbridge::messaging::api::{DisplayPayload, RemoteMessage};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn alert_config() -> PushConfig {
    PushConfig::with_presentation_options(["alert", "sound"])
}

/// A message with a display payload
pub fn display_message(id: &str, title: &str) -> RemoteMessage {
    RemoteMessage::new(id)
        .with_data("source", "integration")
        .with_notification(DisplayPayload {
            title: Some(title.to_string()),
            body: Some(format!("{} body", title)),
            ..Default::default()
        })
}

/// Listener that only counts what it receives
#[derive(Default)]
pub struct CountingListener {
    pub received: AtomicUsize,
    pub names: Mutex<Vec<String>>,
}

impl CountingListener {
    pub fn count(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }
}

impl ListenerInstance for CountingListener {
    fn notify_listeners(&self, event_name: &str, _payload: serde_json::Value, _retain: bool) {
        self.received.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut names) = self.names.lock() {
            names.push(event_name.to_string());
        }
    }
}

/// Write a script to a temp file
pub fn script_file(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().expect("temp script");
    file.write_all(contents.as_bytes()).expect("write script");
    file
}
