//! Delivered notification records

use crate::tray::error::{InventoryError, InventoryResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A notification currently shown in the platform tray
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveredNotification {
    pub id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, rename = "groupSummary")]
    pub is_group_summary: bool,
    #[serde(default, rename = "data")]
    pub extras: serde_json::Map<String, Value>,
}

/// Identity of a delivered notification, as supplied by a removal request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRef {
    pub id: i32,
    pub tag: Option<String>,
}

impl NotificationRef {
    /// Parse one entry of a removal request
    ///
    /// `index` is the entry's position and is only used for error reporting.
    pub fn parse(entry: &Value, index: usize) -> InventoryResult<Self> {
        let object = entry
            .as_object()
            .ok_or_else(|| InventoryError::malformed(index, "expected a notification object"))?;

        let id = match object.get("id") {
            None | Some(Value::Null) => {
                return Err(InventoryError::malformed(index, "missing required field 'id'"))
            }
            Some(value) => value
                .as_i64()
                .and_then(|id| i32::try_from(id).ok())
                .ok_or_else(|| {
                    InventoryError::malformed(index, format!("'id' must be a 32-bit integer, got {}", value))
                })?,
        };

        let tag = match object.get("tag") {
            None | Some(Value::Null) => None,
            Some(Value::String(tag)) => Some(tag.clone()),
            Some(other) => {
                return Err(InventoryError::malformed(
                    index,
                    format!("'tag' must be a string, got {}", other),
                ))
            }
        };

        Ok(Self { id, tag })
    }
}
