// Internal modules - all access should go through api module
pub(crate) mod error;
pub(crate) mod inventory;
pub(crate) mod record;
pub(crate) mod traits;

// Public API module - the only public interface for the notification tray
pub mod api;

#[cfg(test)]
mod tests;
