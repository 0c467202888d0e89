//! Coordinator error types

use crate::bridge::api::BridgeError;
use crate::channels::api::ChannelError;
use crate::core::error_handling::ContextualError;
use crate::tray::api::InventoryError;

#[derive(Debug, thiserror::Error)]
pub enum CoordinatorError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error("No async runtime available to request a device token")]
    NoRuntime,

    #[error("No push coordinator installed in this process")]
    NotInstalled,
}

impl ContextualError for CoordinatorError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, CoordinatorError::Inventory(_))
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            CoordinatorError::Inventory(e) => e.user_message(),
            _ => None,
        }
    }
}

/// Result type for coordinator operations
pub type CoordinatorResult<T> = Result<T, CoordinatorError>;
