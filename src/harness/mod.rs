//! In-memory collaborators and a scripted event runner
//!
//! Stand-ins for the host bridge, platform tray, delivery provider, channel
//! manager and application metadata. The CLI drives a coordinator through
//! them from a JSON script, and the test suites use them as fakes.

pub mod channels;
pub mod host;
pub mod metadata;
pub mod provider;
pub mod script;
pub mod tray;

pub use channels::MemoryChannels;
pub use host::{DispatchedEvent, MemoryHost, RecordingListener};
pub use metadata::StaticMetadata;
pub use provider::ScriptedProvider;
pub use script::{ScriptError, ScriptRunner, Step};
pub use tray::{MemoryTray, TrayCall};

#[cfg(test)]
mod tests;
