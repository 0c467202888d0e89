//! Icon and color resolution from application metadata

use crate::render::error::RenderResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ICON_METADATA_KEY: &str = "com.google.firebase.messaging.default_notification_icon";
pub const COLOR_METADATA_KEY: &str = "com.google.firebase.messaging.default_notification_color";

/// Platform `ic_dialog_info` drawable
pub const FALLBACK_ICON: ResourceId = ResourceId(0x0108_0093);
/// Platform `holo_blue_bright` color
pub const FALLBACK_COLOR: ResourceId = ResourceId(0x0106_001b);

/// Opaque platform resource identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub i32);

/// Integer entries from the application's manifest metadata
pub type MetadataBundle = BTreeMap<String, i32>;

/// Source of application metadata
pub trait AppMetadata: Send + Sync {
    fn application_metadata(&self) -> RenderResult<MetadataBundle>;
}

/// Configured icon/color overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct MetadataOverrides {
    #[serde(default)]
    pub default_notification_icon: Option<i32>,
    #[serde(default)]
    pub default_notification_color: Option<i32>,
}

impl MetadataOverrides {
    pub fn to_bundle(&self) -> MetadataBundle {
        let mut bundle = MetadataBundle::new();
        if let Some(icon) = self.default_notification_icon {
            bundle.insert(ICON_METADATA_KEY.to_string(), icon);
        }
        if let Some(color) = self.default_notification_color {
            bundle.insert(COLOR_METADATA_KEY.to_string(), color);
        }
        bundle
    }
}

/// Resources used to render a local notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NotificationResources {
    pub small_icon: ResourceId,
    pub accent_color: ResourceId,
}

impl Default for NotificationResources {
    fn default() -> Self {
        Self {
            small_icon: FALLBACK_ICON,
            accent_color: FALLBACK_COLOR,
        }
    }
}

/// Resolve icon and color, falling back to platform defaults
///
/// A failed metadata lookup is logged and otherwise ignored.
pub fn resolve_resources(metadata: &dyn AppMetadata) -> NotificationResources {
    let bundle = match metadata.application_metadata() {
        Ok(bundle) => bundle,
        Err(e) => {
            log::warn!("{}; using default notification icon and color", e);
            return NotificationResources::default();
        }
    };

    NotificationResources {
        small_icon: bundle
            .get(ICON_METADATA_KEY)
            .copied()
            .map_or(FALLBACK_ICON, ResourceId),
        accent_color: bundle
            .get(COLOR_METADATA_KEY)
            .copied()
            .map_or(FALLBACK_COLOR, ResourceId),
    }
}
