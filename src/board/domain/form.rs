//! Raw task form input and its validation into [`TaskFields`].

use super::{Deadline, Task, TaskDescription, TaskDomainError, TaskFields, TaskTitle};
use crate::board::config::ValidationLimits;
use chrono::NaiveDate;

/// Unvalidated values as entered in the task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    /// Title text.
    pub title: String,
    /// Description text; blank means none.
    pub description: String,
    /// Picked deadline date.
    pub deadline_date: Option<NaiveDate>,
    /// Deadline time as `HH:MM`; blank means none.
    pub deadline_time: String,
}

impl TaskForm {
    /// Creates a form with a title only.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the description text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the deadline date.
    #[must_use]
    pub const fn with_deadline_date(mut self, date: NaiveDate) -> Self {
        self.deadline_date = Some(date);
        self
    }

    /// Sets the deadline time text.
    #[must_use]
    pub fn with_deadline_time(mut self, time: impl Into<String>) -> Self {
        self.deadline_time = time.into();
        self
    }

    /// Prefills the form from an existing task for editing.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        let deadline = task.deadline();
        Self {
            title: task.title().as_str().to_owned(),
            description: task
                .description()
                .map(|description| description.as_str().to_owned())
                .unwrap_or_default(),
            deadline_date: deadline.map(Deadline::date),
            deadline_time: deadline
                .and_then(Deadline::time)
                .map(|time| time.format("%H:%M").to_string())
                .unwrap_or_default(),
        }
    }

    /// Validates the form.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskDomainError`] found, checking title,
    /// description, then deadline.
    pub fn validate(&self, limits: &ValidationLimits) -> Result<TaskFields, TaskDomainError> {
        let title = TaskTitle::new(self.title.as_str(), limits)?;
        let description = TaskDescription::new(self.description.as_str(), limits)?;
        let deadline = Deadline::from_parts(self.deadline_date, Some(self.deadline_time.as_str()))?;
        Ok(TaskFields {
            title,
            description,
            deadline,
        })
    }
}
