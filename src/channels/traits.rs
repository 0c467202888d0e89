//! Channel management seam

use crate::channels::error::ChannelResult;
use serde::{Deserialize, Serialize};

/// Channel settings as passed through to the platform
///
/// Only `id` is interpreted here; everything else is handed over untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibration: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lights: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_color: Option<String>,
}

/// The platform's notification channel manager
pub trait ChannelManager: Send + Sync {
    fn create_channel(&self, config: &ChannelConfig) -> ChannelResult<()>;

    fn delete_channel(&self, channel_id: &str) -> ChannelResult<()>;

    fn list_channels(&self) -> ChannelResult<Vec<ChannelConfig>>;
}
