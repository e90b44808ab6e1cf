//! Partial task updates.

use super::{ColumnId, Deadline, TaskDescription, TaskFields, TaskTitle};
use crate::board::config::ValidationLimits;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

/// The subset of task fields a client may change after creation.
///
/// Nullable fields use `Option<Option<_>>`: the outer `None` leaves the field
/// untouched, `Some(None)` clears it. Deserialisation rejects unknown fields
/// and validates values against the default [`ValidationLimits`]; a blank
/// description clears the field, as it does in the form.
///
/// [`ValidationLimits`]: crate::board::config::ValidationLimits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<TaskTitle>,
    #[serde(
        default,
        deserialize_with = "description_or_clear",
        skip_serializing_if = "Option::is_none"
    )]
    description: Option<Option<TaskDescription>>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    deadline: Option<Option<Deadline>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    column_id: Option<ColumnId>,
}

type PatchParts = (
    Option<TaskTitle>,
    Option<Option<TaskDescription>>,
    Option<Option<Deadline>>,
    Option<ColumnId>,
);

impl TaskPatch {
    /// Full replacement of the form-editable fields. The column is untouched.
    #[must_use]
    pub fn edit(fields: TaskFields) -> Self {
        Self {
            title: Some(fields.title),
            description: Some(fields.description),
            deadline: Some(fields.deadline),
            column_id: None,
        }
    }

    /// Moves a task to another column and changes nothing else.
    #[must_use]
    pub fn move_to(column_id: ColumnId) -> Self {
        Self {
            column_id: Some(column_id),
            ..Self::default()
        }
    }

    /// Returns the new title, if changed.
    #[must_use]
    pub const fn title(&self) -> Option<&TaskTitle> {
        self.title.as_ref()
    }

    /// Returns the description change, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&Option<TaskDescription>> {
        self.description.as_ref()
    }

    /// Returns the deadline change, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<&Option<Deadline>> {
        self.deadline.as_ref()
    }

    /// Returns the target column, if changed.
    #[must_use]
    pub const fn column_id(&self) -> Option<ColumnId> {
        self.column_id
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.deadline.is_none()
            && self.column_id.is_none()
    }

    pub(crate) fn into_parts(self) -> PatchParts {
        (self.title, self.description, self.deadline, self.column_id)
    }
}

/// Maps a present field to `Some`, so an explicit `null` becomes `Some(None)`.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Like [`present_or_null`], but blank text also clears the description.
fn description_or_clear<'de, D>(
    deserializer: D,
) -> Result<Option<Option<TaskDescription>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(Some(None));
    };
    TaskDescription::new(raw, &ValidationLimits::default())
        .map(Some)
        .map_err(D::Error::custom)
}
