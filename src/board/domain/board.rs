//! Board reconciliation: the grouped, ordered view over a flat task list.
//!
//! [`BoardState`] is always derived. It is rebuilt from the repository's task
//! list after every change and never patched in place.

use super::{COLUMN_ORDER, ColumnCounts, ColumnId, Task, TaskId};
use std::collections::BTreeMap;

/// A column together with the ordered ids of the tasks assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientColumn {
    id: ColumnId,
    task_ids: Vec<TaskId>,
}

impl ClientColumn {
    const fn empty(id: ColumnId) -> Self {
        Self {
            id,
            task_ids: Vec::new(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the column display title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.id.title()
    }

    /// Returns task ids ordered by ascending creation time.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }
}

/// Grouped and ordered view of every task known to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    tasks: BTreeMap<TaskId, Task>,
    columns: BTreeMap<ColumnId, ClientColumn>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::reconcile(Vec::new())
    }
}

impl BoardState {
    /// Builds the board from a flat, unordered task list.
    ///
    /// Every column is present even when the list is empty. Within a column,
    /// tasks are ordered by ascending `created_at`. Tasks without a timestamp
    /// keep the slot they arrived in; the timestamped tasks around them are
    /// sorted among the remaining slots. When an id appears more than once
    /// the last record wins and keeps the first record's position.
    #[must_use]
    pub fn reconcile(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut by_id: BTreeMap<TaskId, Task> = BTreeMap::new();
        let mut arrival: Vec<TaskId> = Vec::new();
        for task in tasks {
            let id = task.id().clone();
            if by_id.insert(id.clone(), task).is_none() {
                arrival.push(id);
            }
        }

        let mut columns: BTreeMap<ColumnId, ClientColumn> = COLUMN_ORDER
            .iter()
            .map(|column_id| (*column_id, ClientColumn::empty(*column_id)))
            .collect();

        for id in arrival {
            let Some(task) = by_id.get(&id) else {
                continue;
            };
            if let Some(column) = columns.get_mut(&task.column_id()) {
                column.task_ids.push(id);
            }
        }

        for column in columns.values_mut() {
            order_by_creation(&mut column.task_ids, &by_id);
        }

        Self {
            tasks: by_id,
            columns,
        }
    }

    /// Returns the fixed column display order.
    #[must_use]
    pub const fn column_order(&self) -> &'static [ColumnId] {
        &COLUMN_ORDER
    }

    /// Returns every known task keyed by id.
    #[must_use]
    pub const fn tasks(&self) -> &BTreeMap<TaskId, Task> {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Returns `true` when the task is on the board.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.tasks.contains_key(id)
    }

    /// Returns the column the task is currently in.
    #[must_use]
    pub fn column_of(&self, id: &TaskId) -> Option<ColumnId> {
        self.task(id).map(Task::column_id)
    }

    /// Returns a column. Every [`ColumnId`] is always present.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<&ClientColumn> {
        self.columns.get(&id)
    }

    /// Iterates the columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = &ClientColumn> {
        COLUMN_ORDER
            .iter()
            .filter_map(|column_id| self.columns.get(column_id))
    }

    /// Returns the tasks of a column in display order.
    #[must_use]
    pub fn tasks_in(&self, id: ColumnId) -> Vec<&Task> {
        self.column(id)
            .map(|column| {
                column
                    .task_ids
                    .iter()
                    .filter_map(|task_id| self.tasks.get(task_id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the number of tasks per column.
    #[must_use]
    pub fn counts(&self) -> ColumnCounts {
        let count_of = |id| self.column(id).map_or(0, ClientColumn::len);
        ColumnCounts::new(
            count_of(ColumnId::Todo),
            count_of(ColumnId::InProgress),
            count_of(ColumnId::Done),
        )
    }

    /// Returns `true` when no tasks are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Sorts timestamped ids by creation time within the slots they occupy.
fn order_by_creation(task_ids: &mut [TaskId], tasks: &BTreeMap<TaskId, Task>) {
    let created_at = |id: &TaskId| tasks.get(id).and_then(Task::created_at);

    let slots: Vec<usize> = task_ids
        .iter()
        .enumerate()
        .filter(|(_, id)| created_at(*id).is_some())
        .map(|(slot, _)| slot)
        .collect();

    let mut timestamped: Vec<TaskId> = slots
        .iter()
        .filter_map(|slot| task_ids.get(*slot).cloned())
        .collect();
    timestamped.sort_by_key(|id| created_at(id));

    for (slot, id) in slots.into_iter().zip(timestamped) {
        if let Some(entry) = task_ids.get_mut(slot) {
            *entry = id;
        }
    }
}
