//! Public API for the delivered-notification inventory
//!
//! Read and remove operations over the platform notification tray. Nothing is
//! cached; every call goes back to the tray.

pub use crate::tray::error::{InventoryError, InventoryResult};
pub use crate::tray::inventory::DeliveredInventory;
pub use crate::tray::record::{DeliveredNotification, NotificationRef};
pub use crate::tray::traits::NotificationTray;
