//! Push notification lifecycle coordination
//!
//! Bridges a remote push provider to a host application's event listeners:
//! buffering the message that arrives before any listener exists, rendering
//! foreground notifications, replaying notification taps, and managing the
//! notifications already in the tray.

pub mod app;
pub mod bridge;
pub mod channels;
pub mod coordinator;
pub mod core;
pub mod harness;
pub mod messaging;
pub mod render;
pub mod tray;

pub use crate::core::version::get_api_version;
