//! In-memory notification tray

use crate::core::sync::lock_or_recover;
use crate::render::api::LocalNotification;
use crate::tray::api::{DeliveredNotification, NotificationTray};
use serde::Serialize;
use std::sync::Mutex;

/// A call made on the tray, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum TrayCall {
    Show { id: i32, request_code: i32 },
    Cancel { id: i32 },
    CancelTagged { tag: String, id: i32 },
    CancelAll,
}

pub struct MemoryTray {
    delivered: Mutex<Vec<DeliveredNotification>>,
    rendered: Mutex<Vec<LocalNotification>>,
    calls: Mutex<Vec<TrayCall>>,
    can_list: bool,
}

impl Default for MemoryTray {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTray {
    pub fn new() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            rendered: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            can_list: true,
        }
    }

    /// A tray on a platform that cannot list active notifications
    pub fn without_list_capability() -> Self {
        Self {
            can_list: false,
            ..Self::new()
        }
    }

    /// Pre-populate the tray
    pub fn with_delivered(self, notifications: Vec<DeliveredNotification>) -> Self {
        *lock_or_recover(&self.delivered, "tray contents") = notifications;
        self
    }

    pub fn calls(&self) -> Vec<TrayCall> {
        lock_or_recover(&self.calls, "tray calls").clone()
    }

    /// Every notification passed to `show`, in order
    pub fn rendered(&self) -> Vec<LocalNotification> {
        lock_or_recover(&self.rendered, "rendered notifications").clone()
    }

    pub fn delivered(&self) -> Vec<DeliveredNotification> {
        lock_or_recover(&self.delivered, "tray contents").clone()
    }

    fn record(&self, call: TrayCall) {
        lock_or_recover(&self.calls, "tray calls").push(call);
    }

    fn retain(&self, keep: impl Fn(&DeliveredNotification) -> bool) {
        lock_or_recover(&self.delivered, "tray contents").retain(|n| keep(n));
    }
}

impl NotificationTray for MemoryTray {
    fn active_notifications(&self) -> Option<Vec<DeliveredNotification>> {
        self.can_list.then(|| self.delivered())
    }

    fn cancel(&self, id: i32) {
        self.record(TrayCall::Cancel { id });
        self.retain(|n| !(n.id == id && n.tag.is_none()));
    }

    fn cancel_tagged(&self, tag: &str, id: i32) {
        self.record(TrayCall::CancelTagged {
            tag: tag.to_string(),
            id,
        });
        self.retain(|n| !(n.id == id && n.tag.as_deref() == Some(tag)));
    }

    fn cancel_all(&self) {
        self.record(TrayCall::CancelAll);
        lock_or_recover(&self.delivered, "tray contents").clear();
    }

    fn show(&self, id: i32, notification: &LocalNotification) {
        self.record(TrayCall::Show {
            id,
            request_code: notification.content_intent.request_code,
        });
        lock_or_recover(&self.rendered, "rendered notifications").push(notification.clone());

        let entry = DeliveredNotification {
            id,
            tag: None,
            title: notification.title.clone(),
            body: notification.body.clone(),
            group: None,
            is_group_summary: false,
            extras: notification.content_intent.extras.clone().into_iter().collect(),
        };
        let mut delivered = lock_or_recover(&self.delivered, "tray contents");
        delivered.retain(|n| !(n.id == id && n.tag.is_none()));
        delivered.push(entry);
    }
}
