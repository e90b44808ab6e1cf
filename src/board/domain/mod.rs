//! Domain model for the Kanban board.
//!
//! Tasks, the fixed column set, form validation, partial updates, and the
//! board reconciler. Nothing in this module performs I/O.

mod board;
mod column;
mod error;
mod fields;
mod form;
mod ids;
mod notification;
mod patch;
mod summary;
mod task;
mod theme;

pub use board::{BoardState, ClientColumn};
pub use column::{COLUMN_ORDER, ColumnId};
pub use error::{ParseColumnIdError, ParseThemePreferenceError, TaskDomainError};
pub use fields::{Deadline, TaskDescription, TaskTitle, parse_time_of_day};
pub use form::TaskForm;
pub use ids::TaskId;
pub use notification::{Notification, Severity};
pub use patch::TaskPatch;
pub use summary::{ColumnCounts, SummarySegment};
pub use task::{NewTask, PersistedTaskData, Task, TaskFields};
pub use theme::{ResolvedTheme, ThemePreference};
