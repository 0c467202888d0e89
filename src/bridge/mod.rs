// Internal modules - all access should go through api module
pub(crate) mod dispatcher;
pub(crate) mod error;
pub(crate) mod event;
pub(crate) mod resolver;
pub(crate) mod traits;

// Public API module - the only public interface for the host bridge seam
pub mod api;
