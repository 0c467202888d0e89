//! Public API for notification rendering
//!
//! Turns a received remote message into an optional local notification and
//! the display fields merged into the `message-received` event.

pub use crate::render::error::{RenderError, RenderResult};
pub use crate::render::intent::{build_tap_intent, PendingIntentFlags, TapIntent};
pub use crate::render::policy::{PresentationOption, PresentationPolicy};
pub use crate::render::renderer::{
    received_event, render, wants_alert, DisplayFields, LocalNotification,
    RenderOutcome, Renderer, NOTIFICATION_SLOT,
};
pub use crate::render::resources::{
    resolve_resources, AppMetadata, MetadataBundle, MetadataOverrides, NotificationResources,
    ResourceId, COLOR_METADATA_KEY, FALLBACK_COLOR, FALLBACK_ICON, ICON_METADATA_KEY,
};
