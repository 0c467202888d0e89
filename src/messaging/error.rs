//! Delivery provider error types

/// Transport failures reported by the delivery provider
///
/// The display text is the provider's human-readable message and is what
/// listeners receive in a `token-error` event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("{message}")]
    TokenUnavailable { message: String },
}

impl ProviderError {
    pub fn token_unavailable(message: impl Into<String>) -> Self {
        ProviderError::TokenUnavailable {
            message: message.into(),
        }
    }
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
