//! Remote message model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Extra key carrying the provider message identifier on a re-delivered intent
pub const REPLAY_KEY: &str = "google.message_id";

/// Key prefix for display payload fields carried in intent extras
pub const DISPLAY_KEY_PREFIX: &str = "gcm.notification.";

/// Key/value extras attached to a host intent
pub type IntentExtras = BTreeMap<String, serde_json::Value>;

/// Display part of a remote message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub click_action: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// A message pushed by the delivery provider; immutable once received
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteMessage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub data: BTreeMap<String, String>,
    #[serde(default)]
    pub notification: Option<DisplayPayload>,
}

impl RemoteMessage {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn with_notification(mut self, notification: DisplayPayload) -> Self {
        self.notification = Some(notification);
        self
    }

    /// The full message as intent extras, the way the provider re-delivers it
    pub fn to_intent_extras(&self) -> IntentExtras {
        let mut extras: IntentExtras = self
            .data
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect();

        if let Some(id) = &self.id {
            extras.insert(REPLAY_KEY.to_string(), serde_json::Value::String(id.clone()));
        }

        if let Some(display) = &self.notification {
            let fields = [
                ("title", &display.title),
                ("body", &display.body),
                ("click_action", &display.click_action),
                ("link", &display.link),
            ];
            for (name, value) in fields {
                if let Some(value) = value {
                    extras.insert(
                        format!("{}{}", DISPLAY_KEY_PREFIX, name),
                        serde_json::Value::String(value.clone()),
                    );
                }
            }
        }

        extras
    }
}
