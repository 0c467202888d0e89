//! Action-Replay Handling
//!
//! A tapped notification re-delivers its intent to the host. Extras carrying
//! the replay key become a `notification-action` event.

use crate::bridge::api::PushEvent;
use crate::messaging::api::{IntentExtras, REPLAY_KEY};
use serde_json::Value;

/// Build the tap action event for a re-delivered intent
///
/// Returns `None` when the extras do not carry the replay key. Every other
/// extra lands in `data`, coerced to a string; null extras stay absent.
pub fn action_from_intent(extras: &IntentExtras) -> Option<PushEvent> {
    let id = extras.get(REPLAY_KEY)?.clone();

    let data = extras
        .iter()
        .filter(|(key, _)| key.as_str() != REPLAY_KEY)
        .filter_map(|(key, value)| Some((key.clone(), coerce_to_string(value)?)))
        .collect();

    Some(PushEvent::tap(id, data))
}

fn coerce_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
