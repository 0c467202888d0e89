//! Scripted delivery provider

use crate::core::sync::lock_or_recover;
use crate::messaging::api::{DeliveryProvider, ProviderError, ProviderResult};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Provider whose token request resolves to a preset token or error
pub struct ScriptedProvider {
    outcome: Mutex<Result<String, String>>,
    auto_init: AtomicBool,
    token_requests: AtomicUsize,
    token_deletions: AtomicUsize,
}

impl ScriptedProvider {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::with_outcome(Ok(token.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_outcome(Err(message.into()))
    }

    fn with_outcome(outcome: Result<String, String>) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            auto_init: AtomicBool::new(false),
            token_requests: AtomicUsize::new(0),
            token_deletions: AtomicUsize::new(0),
        }
    }

    /// Change what the next token request resolves to
    pub fn set_outcome(&self, outcome: Result<String, String>) {
        *lock_or_recover(&self.outcome, "provider outcome") = outcome;
    }

    pub fn auto_init_enabled(&self) -> bool {
        self.auto_init.load(Ordering::SeqCst)
    }

    pub fn token_requests(&self) -> usize {
        self.token_requests.load(Ordering::SeqCst)
    }

    pub fn token_deletions(&self) -> usize {
        self.token_deletions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeliveryProvider for ScriptedProvider {
    fn set_auto_init_enabled(&self, enabled: bool) {
        self.auto_init.store(enabled, Ordering::SeqCst);
    }

    async fn request_token(&self) -> ProviderResult<String> {
        self.token_requests.fetch_add(1, Ordering::SeqCst);
        // Resolve on a later poll, like a network round trip
        tokio::task::yield_now().await;
        lock_or_recover(&self.outcome, "provider outcome")
            .clone()
            .map_err(ProviderError::token_unavailable)
    }

    fn delete_token(&self) {
        self.token_deletions.fetch_add(1, Ordering::SeqCst);
    }
}
