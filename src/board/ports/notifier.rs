//! Notification sink port.

use crate::board::domain::Notification;

/// Surfaces short-lived messages to the user.
///
/// Delivery is fire-and-forget: there is no return value and no ordering
/// guarantee relative to board re-renders.
pub trait NotificationSink: Send + Sync {
    /// Posts a notification.
    fn notify(&self, notification: Notification);
}
