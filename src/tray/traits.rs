//! Platform notification tray seam

use crate::render::api::LocalNotification;
use crate::tray::record::DeliveredNotification;

/// The platform surface that shows and cancels notifications
pub trait NotificationTray: Send + Sync {
    /// Notifications currently shown for this application
    ///
    /// `None` when the platform cannot list active notifications.
    fn active_notifications(&self) -> Option<Vec<DeliveredNotification>>;

    fn cancel(&self, id: i32);

    fn cancel_tagged(&self, tag: &str, id: i32);

    fn cancel_all(&self);

    /// Show `notification` in slot `id`, replacing whatever is there
    fn show(&self, id: i32, notification: &LocalNotification);
}
