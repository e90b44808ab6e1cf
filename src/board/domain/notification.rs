//! User-facing notifications raised by board mutations.

use super::{ColumnId, TaskTitle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational or success message.
    Default,
    /// Failure message.
    Destructive,
}

/// Short-lived message for the notification sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    title: String,
    description: String,
    severity: Severity,
}

impl Notification {
    /// Creates a default-severity notification.
    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    /// Creates a destructive notification.
    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    /// A task was created.
    #[must_use]
    pub fn task_added(title: &TaskTitle) -> Self {
        Self::success("Task Added", format!("Task \"{title}\" has been added."))
    }

    /// A task's fields were edited.
    #[must_use]
    pub fn task_updated(title: &TaskTitle) -> Self {
        Self::success("Task Updated", format!("Task \"{title}\" has been updated."))
    }

    /// A task was moved into a non-terminal column, or within the terminal one.
    #[must_use]
    pub fn task_moved(title: &TaskTitle, target: ColumnId) -> Self {
        Self::success(
            "Task Moved",
            format!("\"{title}\" moved to {}.", target.title()),
        )
    }

    /// A task entered the terminal column.
    #[must_use]
    pub fn task_completed(title: &TaskTitle) -> Self {
        Self::success(
            "Task Completed!",
            format!("\"{title}\" moved to {}. Great job!", ColumnId::TERMINAL.title()),
        )
    }

    /// A task was deleted.
    #[must_use]
    pub fn task_deleted(title: &TaskTitle) -> Self {
        Self::success("Task Deleted", format!("Task \"{title}\" has been deleted."))
    }

    /// A repository call failed.
    #[must_use]
    pub fn failure(message: impl fmt::Display) -> Self {
        Self::destructive("Something went wrong", message.to_string())
    }

    /// Returns the headline.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns `true` for destructive notifications.
    #[must_use]
    pub const fn is_destructive(&self) -> bool {
        matches!(self.severity, Severity::Destructive)
    }
}
