//! Event Dispatcher
//!
//! Fire-and-forget, at most once per call. Nothing is retried here; delivery
//! to late listeners is the host's job when retention is requested.

use crate::bridge::error::{BridgeError, BridgeResult};
use crate::bridge::event::PushEvent;
use crate::bridge::traits::ListenerInstance;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for dispatched events
#[derive(Debug, Default)]
pub struct DispatchStatistics {
    dispatched: AtomicUsize,
    encode_failures: AtomicUsize,
}

impl DispatchStatistics {
    pub fn dispatched(&self) -> usize {
        self.dispatched.load(Ordering::Relaxed)
    }

    pub fn encode_failures(&self) -> usize {
        self.encode_failures.load(Ordering::Relaxed)
    }
}

/// Delivers typed events to a resolved listener instance
#[derive(Debug, Default)]
pub struct EventDispatcher {
    statistics: DispatchStatistics,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statistics(&self) -> &DispatchStatistics {
        &self.statistics
    }

    /// Deliver one event to all listeners registered on `listener`
    pub fn dispatch(
        &self,
        listener: &dyn ListenerInstance,
        event: &PushEvent,
        retain_until_consumed: bool,
    ) -> BridgeResult<()> {
        let kind = event.kind();
        let payload = event.payload().map_err(|source| {
            self.statistics.encode_failures.fetch_add(1, Ordering::Relaxed);
            BridgeError::Encode {
                event: kind.to_string(),
                source,
            }
        })?;

        log::debug!(
            "Dispatching '{}' event (retain: {})",
            kind,
            retain_until_consumed
        );
        listener.notify_listeners(kind.as_ref(), payload, retain_until_consumed);
        self.statistics.dispatched.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
