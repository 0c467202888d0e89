//! Notification Renderer
//!
//! `render` is a pure function from a message, the presentation policy and the
//! resolved resources to a render outcome. `Renderer` wraps it with the
//! metadata lookup and identifier clock; showing the result is left to the
//! caller.

use crate::bridge::api::{PushEvent, ReceivedMessage};
use crate::channels::api::FOREGROUND_CHANNEL_ID;
use crate::core::time::Clock;
use crate::messaging::api::RemoteMessage;
use crate::render::intent::{build_tap_intent, TapIntent};
use crate::render::policy::PresentationPolicy;
use crate::render::resources::{resolve_resources, AppMetadata, NotificationResources, ResourceId};
use serde::Serialize;
use std::sync::Arc;

/// Tray slot every rendered notification is shown in; a new one replaces the last
pub const NOTIFICATION_SLOT: i32 = 0;

/// A fully built local notification, ready to hand to the tray
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalNotification {
    pub channel_id: String,
    pub small_icon: ResourceId,
    pub accent_color: ResourceId,
    pub title: Option<String>,
    pub body: Option<String>,
    pub auto_cancel: bool,
    pub content_intent: TapIntent,
}

/// Display fields merged into the `message-received` payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFields {
    pub title: Option<String>,
    pub body: Option<String>,
    pub click_action: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    /// Notification to show, if the policy and message call for one
    pub notification: Option<LocalNotification>,
    /// Present whenever the message had a display payload
    pub display: Option<DisplayFields>,
}

/// Whether `message` should produce a visible notification under `policy`
pub fn wants_alert(message: &RemoteMessage, policy: &PresentationPolicy) -> bool {
    message.notification.is_some() && policy.shows_alert()
}

pub fn render(
    message: &RemoteMessage,
    policy: &PresentationPolicy,
    resources: &NotificationResources,
    identifier: i32,
) -> RenderOutcome {
    let Some(display) = &message.notification else {
        return RenderOutcome {
            notification: None,
            display: None,
        };
    };

    let notification = wants_alert(message, policy).then(|| LocalNotification {
        channel_id: FOREGROUND_CHANNEL_ID.to_string(),
        small_icon: resources.small_icon,
        accent_color: resources.accent_color,
        title: display.title.clone(),
        body: display.body.clone(),
        auto_cancel: true,
        content_intent: build_tap_intent(message, identifier),
    });

    RenderOutcome {
        notification,
        display: Some(DisplayFields {
            title: display.title.clone(),
            body: display.body.clone(),
            click_action: display.click_action.clone(),
            link: display.link.clone(),
        }),
    }
}

/// The `message-received` event for `message`, with display fields merged in
pub fn received_event(message: &RemoteMessage, display: Option<&DisplayFields>) -> PushEvent {
    let mut payload = ReceivedMessage {
        id: message.id.clone(),
        data: message.data.clone(),
        ..Default::default()
    };
    if let Some(display) = display {
        payload.title = display.title.clone();
        payload.body = display.body.clone();
        payload.click_action = display.click_action.clone();
        payload.link = display.link.clone();
    }
    PushEvent::MessageReceived(payload)
}

/// Renders messages under a fixed policy
pub struct Renderer {
    policy: PresentationPolicy,
    metadata: Arc<dyn AppMetadata>,
    clock: Arc<dyn Clock>,
}

impl Renderer {
    pub fn new(
        policy: PresentationPolicy,
        metadata: Arc<dyn AppMetadata>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            policy,
            metadata,
            clock,
        }
    }

    pub fn policy(&self) -> &PresentationPolicy {
        &self.policy
    }

    /// Render `message`, resolving resources and the identifier only when needed
    pub fn render(&self, message: &RemoteMessage) -> RenderOutcome {
        if !wants_alert(message, &self.policy) {
            log::debug!(
                "No local notification for message {:?} (display payload: {}, alert: {})",
                message.id,
                message.notification.is_some(),
                self.policy.shows_alert()
            );
            return render(message, &self.policy, &NotificationResources::default(), 0);
        }

        let resources = resolve_resources(self.metadata.as_ref());
        // Wall-clock seconds: two renders within one second share an identity
        let identifier = self.clock.epoch_seconds();
        render(message, &self.policy, &resources, identifier)
    }
}
