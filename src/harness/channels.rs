//! In-memory channel manager

use crate::channels::api::{ChannelConfig, ChannelError, ChannelManager, ChannelResult};
use crate::core::sync::lock_or_recover;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryChannels {
    channels: Mutex<BTreeMap<String, ChannelConfig>>,
    failure: Mutex<Option<String>>,
}

impl MemoryChannels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every later call with `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        *lock_or_recover(&self.failure, "channel failure") = Some(message.into());
    }

    fn check_available(&self) -> ChannelResult<()> {
        match lock_or_recover(&self.failure, "channel failure").clone() {
            Some(message) => Err(ChannelError::Rejected { message }),
            None => Ok(()),
        }
    }
}

impl ChannelManager for MemoryChannels {
    fn create_channel(&self, config: &ChannelConfig) -> ChannelResult<()> {
        self.check_available()?;
        if config.id.trim().is_empty() {
            return Err(ChannelError::Rejected {
                message: "channel id must not be empty".to_string(),
            });
        }
        lock_or_recover(&self.channels, "channels").insert(config.id.clone(), config.clone());
        Ok(())
    }

    fn delete_channel(&self, channel_id: &str) -> ChannelResult<()> {
        self.check_available()?;
        lock_or_recover(&self.channels, "channels")
            .remove(channel_id)
            .map(|_| ())
            .ok_or_else(|| ChannelError::NotFound {
                channel_id: channel_id.to_string(),
            })
    }

    fn list_channels(&self) -> ChannelResult<Vec<ChannelConfig>> {
        self.check_available()?;
        Ok(lock_or_recover(&self.channels, "channels")
            .values()
            .cloned()
            .collect())
    }
}
