//! Delivered-Notification Inventory

use crate::tray::error::{InventoryError, InventoryResult};
use crate::tray::record::{DeliveredNotification, NotificationRef};
use crate::tray::traits::NotificationTray;
use serde_json::Value;
use std::sync::Arc;

pub struct DeliveredInventory {
    tray: Arc<dyn NotificationTray>,
}

impl DeliveredInventory {
    pub fn new(tray: Arc<dyn NotificationTray>) -> Self {
        Self { tray }
    }

    /// Currently delivered notifications; empty where the platform cannot list them
    pub fn list(&self) -> Vec<DeliveredNotification> {
        match self.tray.active_notifications() {
            Some(notifications) => notifications,
            None => {
                log::warn!("Platform cannot list active notifications; reporting none");
                Vec::new()
            }
        }
    }

    /// Cancel each notification named in a removal request
    ///
    /// `notifications` must be an array of `{id, tag?}` objects. Entries are
    /// cancelled in order; the first malformed entry fails the call and
    /// entries already cancelled stay cancelled. Returns the number cancelled.
    pub fn remove(&self, notifications: &Value) -> InventoryResult<usize> {
        let entries = notifications.as_array().ok_or(InventoryError::NotAList)?;

        for (index, entry) in entries.iter().enumerate() {
            let target = NotificationRef::parse(entry, index).map_err(|e| {
                log::warn!("Stopping removal after {} of {} entries: {}", index, entries.len(), e);
                e
            })?;
            self.cancel(&target);
        }

        Ok(entries.len())
    }

    pub fn cancel(&self, target: &NotificationRef) {
        match &target.tag {
            Some(tag) => {
                log::debug!("Cancelling notification {} (tag '{}')", target.id, tag);
                self.tray.cancel_tagged(tag, target.id);
            }
            None => {
                log::debug!("Cancelling notification {}", target.id);
                self.tray.cancel(target.id);
            }
        }
    }

    pub fn remove_all(&self) {
        log::debug!("Cancelling all delivered notifications");
        self.tray.cancel_all();
    }
}
