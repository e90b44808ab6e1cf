//! Drag-and-drop state machine.
//!
//! Two states: [`DragState::Idle`] and [`DragState::Dragging`]. A drop is the
//! only way a task changes column after creation.

use crate::board::{
    domain::{ColumnId, TaskId},
    ports::{Celebration, NotificationSink, TaskRepository},
    services::{MutationCoordinator, MutationError, MutationOutcome},
};
use tracing::debug;

/// Current drag state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A task card is being dragged.
    Dragging(TaskId),
}

/// Effect reported back to the platform drag operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    /// The drag moves the item.
    Move,
}

/// Result of a drop.
#[derive(Debug, Clone)]
pub enum DropOutcome {
    /// Nothing was being dragged.
    NothingDragged,
    /// The drop was a guarded no-op: the task vanished or the target is its
    /// current column.
    Skipped(TaskId),
    /// The move was accepted by the repository.
    Moved {
        /// Moved task.
        task_id: TaskId,
        /// Column it now belongs to.
        target: ColumnId,
    },
    /// The move failed. The failure has already been notified.
    Failed {
        /// Task that was dropped.
        task_id: TaskId,
        /// Underlying error.
        error: MutationError,
    },
}

/// Tracks the dragged task and turns drops into move mutations.
#[derive(Debug, Clone, Default)]
pub struct DragDropController {
    state: DragState,
}

impl DragDropController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns the dragged task, if any.
    #[must_use]
    pub const fn dragged(&self) -> Option<&TaskId> {
        match &self.state {
            DragState::Dragging(task_id) => Some(task_id),
            DragState::Idle => None,
        }
    }

    /// Starts dragging a task card. A drag already in progress is replaced.
    pub fn drag_start(&mut self, task_id: TaskId) -> DragEffect {
        debug!(task_id = %task_id, "drag started");
        self.state = DragState::Dragging(task_id);
        DragEffect::Move
    }

    /// Accepts a drag over any column surface.
    #[must_use]
    pub const fn drag_over(&self, _column: ColumnId) -> DragEffect {
        DragEffect::Move
    }

    /// Abandons the drag without dropping.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Drops the dragged task onto `target`.
    ///
    /// The controller returns to [`DragState::Idle`] before any other work,
    /// so every exit path (including a dropped future) leaves it idle.
    pub async fn drop_on<R, N, E>(
        &mut self,
        target: ColumnId,
        coordinator: &MutationCoordinator<R, N, E>,
    ) -> DropOutcome
    where
        R: TaskRepository,
        N: NotificationSink,
        E: Celebration,
    {
        let DragState::Dragging(task_id) = std::mem::take(&mut self.state) else {
            return DropOutcome::NothingDragged;
        };

        match coordinator.move_task(&task_id, target).await {
            Ok(MutationOutcome::Applied) => DropOutcome::Moved { task_id, target },
            Ok(MutationOutcome::Skipped) => DropOutcome::Skipped(task_id),
            Err(error) => DropOutcome::Failed { task_id, error },
        }
    }
}
