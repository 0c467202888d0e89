//! Public API for provider-side messaging
//!
//! Remote message model, the delivery provider seam, and the single-slot
//! buffer that holds a message arriving before any listener exists.

pub use crate::messaging::buffer::{Admission, EarlyBuffer};
pub use crate::messaging::error::{ProviderError, ProviderResult};
pub use crate::messaging::message::{
    DisplayPayload, IntentExtras, RemoteMessage, DISPLAY_KEY_PREFIX, REPLAY_KEY,
};
pub use crate::messaging::provider::DeliveryProvider;
