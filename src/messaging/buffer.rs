//! Early-Event Buffer
//!
//! Process-wide single slot for a message that arrives before any listener
//! instance exists. Last write wins; there is no queue. The slot lock is held
//! across the listener lookup so that a concurrent attach either sees the
//! stored message or the message sees the attached listener, never neither.

use crate::bridge::api::ListenerInstance;
use crate::core::sync::lock_or_recover;
use crate::messaging::message::RemoteMessage;
use std::sync::{Arc, Mutex};

/// Outcome of offering a message to the buffer
pub enum Admission {
    /// A listener resolved; the caller must render and dispatch the message now
    Deliver {
        listener: Arc<dyn ListenerInstance>,
        message: RemoteMessage,
    },
    /// No listener; the message now occupies the slot
    Buffered { replaced: Option<RemoteMessage> },
}

impl std::fmt::Debug for Admission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Admission::Deliver { message, .. } => f
                .debug_struct("Deliver")
                .field("message", message)
                .finish_non_exhaustive(),
            Admission::Buffered { replaced } => f
                .debug_struct("Buffered")
                .field("replaced", replaced)
                .finish(),
        }
    }
}

#[derive(Debug, Default)]
pub struct EarlyBuffer {
    slot: Mutex<Option<RemoteMessage>>,
}

impl EarlyBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand `message` to a resolved listener, or store it in the slot
    ///
    /// `resolve` runs while the slot is locked and must not call back into
    /// this buffer.
    pub fn admit<F>(&self, message: RemoteMessage, resolve: F) -> Admission
    where
        F: FnOnce() -> Option<Arc<dyn ListenerInstance>>,
    {
        let mut slot = lock_or_recover(&self.slot, "early buffer");
        match resolve() {
            Some(listener) => Admission::Deliver { listener, message },
            None => {
                let replaced = slot.replace(message);
                match &replaced {
                    Some(old) => log::debug!(
                        "No listener yet; buffered message {:?} replaces {:?}",
                        slot.as_ref().and_then(|m| m.id.as_deref()),
                        old.id
                    ),
                    None => log::debug!(
                        "No listener yet; buffered message {:?}",
                        slot.as_ref().and_then(|m| m.id.as_deref())
                    ),
                }
                Admission::Buffered { replaced }
            }
        }
    }

    /// Remove and return the buffered message, leaving the slot empty
    pub fn take(&self) -> Option<RemoteMessage> {
        lock_or_recover(&self.slot, "early buffer").take()
    }

    /// Copy of the buffered message without clearing it
    pub fn peek(&self) -> Option<RemoteMessage> {
        lock_or_recover(&self.slot, "early buffer").clone()
    }

    pub fn is_empty(&self) -> bool {
        lock_or_recover(&self.slot, "early buffer").is_none()
    }
}
