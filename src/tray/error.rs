//! Inventory error types

use crate::core::error_handling::ContextualError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("Expected notifications to be a list of notification objects")]
    NotAList,

    #[error("Malformed notification at index {index}: {reason}")]
    MalformedEntry { index: usize, reason: String },
}

impl InventoryError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        InventoryError::MalformedEntry {
            index,
            reason: reason.into(),
        }
    }
}

impl ContextualError for InventoryError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            InventoryError::NotAList => {
                Some("Expected notifications to be a list of notification objects")
            }
            InventoryError::MalformedEntry { reason, .. } => Some(reason),
        }
    }
}

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;
