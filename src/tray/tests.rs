//! Tests for the delivered-notification inventory

use super::api::*;
use crate::harness::{MemoryTray, TrayCall};
use serde_json::json;
use std::sync::Arc;

fn delivered(id: i32, tag: Option<&str>) -> DeliveredNotification {
    DeliveredNotification {
        id,
        tag: tag.map(str::to_string),
        title: Some(format!("title {}", id)),
        ..Default::default()
    }
}

fn inventory_over(tray: MemoryTray) -> (Arc<MemoryTray>, DeliveredInventory) {
    let tray = Arc::new(tray);
    let inventory = DeliveredInventory::new(tray.clone());
    (tray, inventory)
}

#[test]
fn test_list_returns_tray_contents() {
    let (_, inventory) =
        inventory_over(MemoryTray::new().with_delivered(vec![delivered(1, None), delivered(2, Some("t"))]));

    let listed = inventory.list();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[1].tag.as_deref(), Some("t"));
}

#[test]
fn test_list_without_capability_is_empty() {
    let (_, inventory) =
        inventory_over(MemoryTray::without_list_capability().with_delivered(vec![delivered(1, None)]));
    assert!(inventory.list().is_empty());
}

#[test]
fn test_remove_with_tag_cancels_by_tag_and_id() {
    let (tray, inventory) = inventory_over(MemoryTray::new());
    inventory.remove(&json!([{ "id": 5, "tag": "t" }])).unwrap();
    assert_eq!(
        tray.calls(),
        vec![TrayCall::CancelTagged {
            tag: "t".to_string(),
            id: 5
        }]
    );
}

#[test]
fn test_remove_without_tag_cancels_by_id() {
    let (tray, inventory) = inventory_over(MemoryTray::new());
    inventory.remove(&json!([{ "id": 5 }, { "id": 6, "tag": null }])).unwrap();
    assert_eq!(
        tray.calls(),
        vec![TrayCall::Cancel { id: 5 }, TrayCall::Cancel { id: 6 }]
    );
}

#[test]
fn test_remove_missing_id_rejects_without_cancelling() {
    let (tray, inventory) = inventory_over(MemoryTray::new());
    let result = inventory.remove(&json!([{}]));

    assert_eq!(
        result,
        Err(InventoryError::MalformedEntry {
            index: 0,
            reason: "missing required field 'id'".to_string()
        })
    );
    assert!(tray.calls().is_empty());
}

#[test]
fn test_remove_stops_at_first_malformed_entry() {
    let (tray, inventory) = inventory_over(MemoryTray::new());
    let result = inventory.remove(&json!([{ "id": 1 }, "not an object", { "id": 3 }]));

    assert!(matches!(
        result,
        Err(InventoryError::MalformedEntry { index: 1, .. })
    ));
    // The entry before the malformed one stays cancelled
    assert_eq!(tray.calls(), vec![TrayCall::Cancel { id: 1 }]);
}

#[test]
fn test_remove_rejects_non_list_argument() {
    let (_, inventory) = inventory_over(MemoryTray::new());
    assert_eq!(inventory.remove(&json!({ "id": 1 })), Err(InventoryError::NotAList));
}

#[test]
fn test_notification_ref_type_checks() {
    assert!(NotificationRef::parse(&json!({ "id": "5" }), 0).is_err());
    assert!(NotificationRef::parse(&json!({ "id": 5_000_000_000i64 }), 0).is_err());
    assert!(NotificationRef::parse(&json!({ "id": 5, "tag": 9 }), 0).is_err());
    assert_eq!(
        NotificationRef::parse(&json!({ "id": -1, "tag": "x" }), 0).unwrap(),
        NotificationRef {
            id: -1,
            tag: Some("x".to_string())
        }
    );
}

#[test]
fn test_remove_all_on_empty_tray() {
    let (tray, inventory) = inventory_over(MemoryTray::new());
    inventory.remove_all();
    inventory.remove_all();
    assert_eq!(tray.calls(), vec![TrayCall::CancelAll, TrayCall::CancelAll]);
    assert!(inventory.list().is_empty());
}

#[test]
fn test_delivered_record_field_names() {
    let mut record = delivered(4, Some("chat"));
    record.is_group_summary = true;
    record.extras.insert("k".to_string(), json!(1));

    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "id": 4,
            "tag": "chat",
            "title": "title 4",
            "groupSummary": true,
            "data": { "k": 1 }
        })
    );
}
