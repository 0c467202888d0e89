//! Tap intent construction

use crate::messaging::api::{IntentExtras, RemoteMessage, REPLAY_KEY};
use serde::Serialize;

/// Pending intent creation flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingIntentFlags {
    /// Cancel any existing pending intent with the same identity first
    pub cancel_current: bool,
    pub immutable: bool,
}

impl PendingIntentFlags {
    pub const CANCEL_CURRENT_IMMUTABLE: Self = Self {
        cancel_current: true,
        immutable: true,
    };
}

/// Intent that re-delivers a message to the host's new-intent entry point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TapIntent {
    /// Pending intent request code; also the replay key value
    pub request_code: i32,
    pub extras: IntentExtras,
    pub flags: PendingIntentFlags,
}

/// Build the tap intent for `message` under a freshly generated identifier
///
/// The identifier replaces the provider message id under the replay key.
pub fn build_tap_intent(message: &RemoteMessage, identifier: i32) -> TapIntent {
    let mut extras = message.to_intent_extras();
    extras.insert(REPLAY_KEY.to_string(), serde_json::Value::from(identifier));

    TapIntent {
        request_code: identifier,
        extras,
        flags: PendingIntentFlags::CANCEL_CURRENT_IMMUTABLE,
    }
}
