//! Public API for the host bridge seam
//!
//! The host owns listener instances and their lifetime; this module resolves
//! the current instance by name and delivers typed events to it.

pub use crate::bridge::dispatcher::{DispatchStatistics, EventDispatcher};
pub use crate::bridge::error::{BridgeError, BridgeResult};
pub use crate::bridge::event::{
    ActionNotification, ActionPerformed, EventKind, PushEvent, ReceivedMessage, TokenErrorPayload,
    TokenPayload, TAP_ACTION_ID,
};
pub use crate::bridge::resolver::{ListenerResolver, PLUGIN_NAME};
pub use crate::bridge::traits::{ListenerInstance, ListenerRegistry};
