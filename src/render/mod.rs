// Internal modules - all access should go through api module
pub(crate) mod error;
pub(crate) mod intent;
pub(crate) mod policy;
pub(crate) mod renderer;
pub(crate) mod resources;

// Public API module - the only public interface for notification rendering
pub mod api;
