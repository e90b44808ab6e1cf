//! Notification sink that records every notification it receives.

use std::sync::{Arc, PoisonError, RwLock};

use crate::board::{domain::Notification, ports::NotificationSink};

/// Thread-safe recording notification sink.
///
/// Clones share the same log, so a test can keep one handle and pass the
/// other to a coordinator.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotificationSink {
    log: Arc<RwLock<Vec<Notification>>>,
}

impl RecordingNotificationSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notification received so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.log
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent notification.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.log
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Discards the recorded notifications.
    pub fn clear(&self) {
        self.log
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, notification: Notification) {
        self.log
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
