//! Per-column task counts for the progress summary.

use super::{COLUMN_ORDER, ColumnId};

/// Number of tasks in each column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnCounts {
    todo: usize,
    in_progress: usize,
    done: usize,
}

/// One non-empty slice of the progress summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarySegment {
    /// Column the segment represents.
    pub column: ColumnId,
    /// Display label.
    pub label: &'static str,
    /// Number of tasks.
    pub count: usize,
}

impl ColumnCounts {
    /// Creates counts from explicit values.
    #[must_use]
    pub const fn new(todo: usize, in_progress: usize, done: usize) -> Self {
        Self {
            todo,
            in_progress,
            done,
        }
    }

    /// Returns the count for a column.
    #[must_use]
    pub const fn get(&self, column: ColumnId) -> usize {
        match column {
            ColumnId::Todo => self.todo,
            ColumnId::InProgress => self.in_progress,
            ColumnId::Done => self.done,
        }
    }

    /// Returns the total number of tasks.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.todo + self.in_progress + self.done
    }

    /// Returns `true` when the board holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Returns the summary segments in display order, omitting empty columns.
    #[must_use]
    pub fn segments(&self) -> Vec<SummarySegment> {
        COLUMN_ORDER
            .iter()
            .map(|column| SummarySegment {
                column: *column,
                label: column.title(),
                count: self.get(*column),
            })
            .filter(|segment| segment.count > 0)
            .collect()
    }
}
