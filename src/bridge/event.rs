//! Event types delivered to the host listener

use serde::Serialize;
use std::collections::BTreeMap;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Action identifier reported when the user taps a rendered notification
pub const TAP_ACTION_ID: &str = "tap";

/// Event names as seen by host listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum EventKind {
    Token,
    TokenError,
    MessageReceived,
    NotificationAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenPayload {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenErrorPayload {
    pub error: String,
}

/// Payload of a `message-received` event
///
/// Display fields are only present when the remote message carried a display
/// payload; `link` only when that payload had one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReceivedMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub data: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// The notification part of a `notification-action` event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionNotification {
    pub id: serde_json::Value,
    pub data: BTreeMap<String, String>,
}

/// Payload of a `notification-action` event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionPerformed {
    #[serde(rename = "actionId")]
    pub action_id: String,
    pub notification: ActionNotification,
}

/// A typed event ready for dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum PushEvent {
    Token(TokenPayload),
    TokenError(TokenErrorPayload),
    MessageReceived(ReceivedMessage),
    NotificationAction(ActionPerformed),
}

impl PushEvent {
    pub fn token(value: impl Into<String>) -> Self {
        PushEvent::Token(TokenPayload {
            value: value.into(),
        })
    }

    pub fn token_error(error: impl Into<String>) -> Self {
        PushEvent::TokenError(TokenErrorPayload {
            error: error.into(),
        })
    }

    pub fn tap(id: serde_json::Value, data: BTreeMap<String, String>) -> Self {
        PushEvent::NotificationAction(ActionPerformed {
            action_id: TAP_ACTION_ID.to_string(),
            notification: ActionNotification { id, data },
        })
    }

    pub fn kind(&self) -> EventKind {
        match self {
            PushEvent::Token(_) => EventKind::Token,
            PushEvent::TokenError(_) => EventKind::TokenError,
            PushEvent::MessageReceived(_) => EventKind::MessageReceived,
            PushEvent::NotificationAction(_) => EventKind::NotificationAction,
        }
    }

    /// Structured payload as handed to the host
    pub fn payload(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            PushEvent::Token(p) => serde_json::to_value(p),
            PushEvent::TokenError(p) => serde_json::to_value(p),
            PushEvent::MessageReceived(p) => serde_json::to_value(p),
            PushEvent::NotificationAction(p) => serde_json::to_value(p),
        }
    }
}
