// Internal modules - all access should go through api module
pub(crate) mod error;
pub(crate) mod traits;

// Public API module - the only public interface for channel management
pub mod api;
