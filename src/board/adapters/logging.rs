//! Notification sink that writes notifications as log events.

use crate::board::{
    domain::{Notification, Severity},
    ports::NotificationSink,
};

/// Emits each notification through `tracing`.
///
/// Destructive notifications are logged at `warn`, everything else at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notification: Notification) {
        match notification.severity() {
            Severity::Default => tracing::info!(
                title = notification.title(),
                description = notification.description(),
                "notification"
            ),
            Severity::Destructive => tracing::warn!(
                title = notification.title(),
                description = notification.description(),
                "notification"
            ),
        }
    }
}
