// Internal modules - all access should go through api module
pub(crate) mod config;
#[allow(clippy::module_inception)]
pub(crate) mod coordinator;
pub(crate) mod error;
pub(crate) mod replay;

// Public API module - the only public interface for the coordinator
pub mod api;
