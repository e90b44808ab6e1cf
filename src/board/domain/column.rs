//! The fixed set of workflow columns.

use super::ParseColumnIdError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow column a task occupies.
///
/// The set is closed: columns are never created, renamed, or removed at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    /// Work not yet started.
    Todo,
    /// Work underway.
    InProgress,
    /// Completed work.
    Done,
}

/// Left-to-right display order of the board's columns.
pub const COLUMN_ORDER: [ColumnId; 3] = [ColumnId::Todo, ColumnId::InProgress, ColumnId::Done];

impl ColumnId {
    /// Column that newly created tasks land in.
    pub const ENTRY: Self = Self::Todo;

    /// Column representing completed work.
    pub const TERMINAL: Self = Self::Done;

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inprogress",
            Self::Done => "done",
        }
    }

    /// Returns the display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns `true` for the terminal column.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl TryFrom<&str> for ColumnId {
    type Error = ParseColumnIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseColumnIdError(value.to_owned())),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
