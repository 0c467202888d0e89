//! Public API for the notification channel collaborator
//!
//! Channel configuration is owned by the host platform; this crate forwards
//! create/delete/list calls and only relies on the foreground channel id.

pub use crate::channels::error::{ChannelError, ChannelResult};
pub use crate::channels::traits::{ChannelConfig, ChannelManager};

/// Channel every locally rendered push notification is posted to
pub const FOREGROUND_CHANNEL_ID: &str = "PushDefaultForeground";
