//! Delivery provider seam

use crate::messaging::error::ProviderResult;
use async_trait::async_trait;

/// The external service that issues device tokens and pushes messages
///
/// Messages and token rotations arrive through the coordinator's entry points
/// (`on_message`, `on_new_token`); this trait covers the calls made into the
/// provider.
#[async_trait]
pub trait DeliveryProvider: Send + Sync {
    /// Toggle automatic token generation at provider start-up
    fn set_auto_init_enabled(&self, enabled: bool);

    /// Fetch the current device token, issuing one if needed
    async fn request_token(&self) -> ProviderResult<String>;

    /// Invalidate the current device token; completion is not observed
    fn delete_token(&self);
}
