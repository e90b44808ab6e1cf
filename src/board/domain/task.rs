//! Task record and the value types used to create and change it.

use super::{ColumnId, Deadline, TaskDescription, TaskId, TaskPatch, TaskTitle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Editable task content produced by a validated form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    /// Task title.
    pub title: TaskTitle,
    /// Optional description.
    pub description: Option<TaskDescription>,
    /// Optional deadline.
    pub deadline: Option<Deadline>,
}

impl TaskFields {
    /// Creates fields with a title only.
    #[must_use]
    pub const fn titled(title: TaskTitle) -> Self {
        Self {
            title,
            description: None,
            deadline: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: TaskDescription) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Payload handed to the repository when creating a task.
///
/// The repository assigns the identifier and creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    fields: TaskFields,
    column_id: ColumnId,
}

impl NewTask {
    /// Creates a payload placed in the entry column.
    #[must_use]
    pub const fn in_entry_column(fields: TaskFields) -> Self {
        Self {
            fields,
            column_id: ColumnId::ENTRY,
        }
    }

    /// Returns the task content.
    #[must_use]
    pub const fn fields(&self) -> &TaskFields {
        &self.fields
    }

    /// Returns the target column.
    #[must_use]
    pub const fn column_id(&self) -> ColumnId {
        self.column_id
    }

    /// Splits the payload into its parts.
    #[must_use]
    pub fn into_parts(self) -> (TaskFields, ColumnId) {
        (self.fields, self.column_id)
    }
}

/// A task as known to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<TaskDescription>,
    deadline: Option<Deadline>,
    column_id: ColumnId,
    created_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Repository-assigned identifier.
    pub id: TaskId,
    /// Stored title.
    pub title: TaskTitle,
    /// Stored description, if any.
    pub description: Option<TaskDescription>,
    /// Stored deadline, if any.
    pub deadline: Option<Deadline>,
    /// Stored column.
    pub column_id: ColumnId,
    /// Repository-assigned creation timestamp, if the store has one yet.
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Materialises a freshly created task inside a repository adapter.
    #[must_use]
    pub fn from_new(id: TaskId, new_task: NewTask, created_at: DateTime<Utc>) -> Self {
        let (fields, column_id) = new_task.into_parts();
        Self {
            id,
            title: fields.title,
            description: fields.description,
            deadline: fields.deadline,
            column_id,
            created_at: Some(created_at),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            deadline: data.deadline,
            column_id: data.column_id,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<&Deadline> {
        self.deadline.as_ref()
    }

    /// Returns the column the task is assigned to.
    #[must_use]
    pub const fn column_id(&self) -> ColumnId {
        self.column_id
    }

    /// Returns the creation timestamp, if known.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Applies a partial update. Fields absent from the patch are unchanged.
    pub fn apply_patch(&mut self, patch: TaskPatch) {
        let (title, description, deadline, column_id) = patch.into_parts();
        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_description) = description {
            self.description = new_description;
        }
        if let Some(new_deadline) = deadline {
            self.deadline = new_deadline;
        }
        if let Some(new_column) = column_id {
            self.column_id = new_column;
        }
    }
}
