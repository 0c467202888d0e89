// Internal modules - all access should go through api module
pub(crate) mod buffer;
pub(crate) mod error;
pub(crate) mod message;
pub(crate) mod provider;

// Public API module - the only public interface for provider-side messaging
pub mod api;
