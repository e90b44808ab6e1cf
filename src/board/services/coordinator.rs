//! Mutation coordination: one repository call per user intent.
//!
//! Every operation follows the same shape. The repository is called first;
//! on success the task-list cache is invalidated and one success notification
//! is posted, on failure one destructive notification carrying the error is
//! posted and the cache is left alone. No local state is changed before the
//! round trip completes, and failures are never retried.

use crate::board::{
    domain::{BoardState, ColumnId, NewTask, Notification, TaskFields, TaskId, TaskPatch},
    ports::{Celebration, NotificationSink, TaskRepository, TaskRepositoryError},
    services::TaskListCache,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for board mutations.
#[derive(Debug, Clone, Error)]
pub enum MutationError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for mutation coordinator operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// What a mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The repository accepted the change.
    Applied,
    /// Nothing was sent: the task is no longer on the board, or the change
    /// would have been a no-op.
    Skipped,
}

/// Board mutation orchestration service.
pub struct MutationCoordinator<R, N, E>
where
    R: TaskRepository,
    N: NotificationSink,
    E: Celebration,
{
    repository: Arc<R>,
    cache: TaskListCache<R>,
    notifier: Arc<N>,
    celebration: Arc<E>,
}

impl<R, N, E> MutationCoordinator<R, N, E>
where
    R: TaskRepository,
    N: NotificationSink,
    E: Celebration,
{
    /// Creates a new coordinator with an empty task-list cache.
    #[must_use]
    pub fn new(repository: Arc<R>, notifier: Arc<N>, celebration: Arc<E>) -> Self {
        Self {
            cache: TaskListCache::new(Arc::clone(&repository)),
            repository,
            notifier,
            celebration,
        }
    }

    /// Returns the task-list cache.
    #[must_use]
    pub const fn cache(&self) -> &TaskListCache<R> {
        &self.cache
    }

    /// Returns the current board, fetching it when the cache is empty.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Repository`] when the fetch fails. Load
    /// failures are reported through the notification sink as well.
    pub async fn board(&self) -> MutationResult<Arc<BoardState>> {
        match self.cache.board().await {
            Ok(board) => Ok(board),
            Err(err) => Err(self.report_failure("load tasks", err)),
        }
    }

    /// Creates a task in the entry column.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Repository`] when the repository rejects the
    /// task. Nothing is added to the board in that case.
    pub async fn create(&self, fields: TaskFields) -> MutationResult<TaskId> {
        let notification = Notification::task_added(&fields.title);
        let result = self
            .repository
            .create(NewTask::in_entry_column(fields))
            .await;
        let id = self.settle("create task", result)?;
        info!(task_id = %id, column = %ColumnId::ENTRY, "task created");
        self.notifier.notify(notification);
        Ok(id)
    }

    /// Replaces a task's title, description, and deadline. The column is
    /// left unchanged.
    ///
    /// Returns [`MutationOutcome::Skipped`] without calling the repository
    /// when the task is no longer on the board.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Repository`] when loading the board or the
    /// update fails.
    pub async fn edit(&self, id: &TaskId, fields: TaskFields) -> MutationResult<MutationOutcome> {
        let board = self.board().await?;
        if !board.contains(id) {
            debug!(task_id = %id, "edit skipped: task is no longer on the board");
            return Ok(MutationOutcome::Skipped);
        }

        let notification = Notification::task_updated(&fields.title);
        let result = self.repository.update(id, TaskPatch::edit(fields)).await;
        self.settle("update task", result)?;
        info!(task_id = %id, "task updated");
        self.notifier.notify(notification);
        Ok(MutationOutcome::Applied)
    }

    /// Moves a task to `target`.
    ///
    /// Issued by the drag-drop controller on a successful drop. Returns
    /// [`MutationOutcome::Skipped`] without calling the repository when the
    /// task is gone or already in `target`. Entering the terminal column from
    /// any other column fires the celebration exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Repository`] when loading the board or the
    /// update fails.
    pub async fn move_task(&self, id: &TaskId, target: ColumnId) -> MutationResult<MutationOutcome> {
        let board = self.board().await?;
        let Some(task) = board.task(id) else {
            debug!(task_id = %id, "move skipped: task is no longer on the board");
            return Ok(MutationOutcome::Skipped);
        };
        let source = task.column_id();
        if source == target {
            debug!(task_id = %id, column = %target, "move skipped: same column");
            return Ok(MutationOutcome::Skipped);
        }

        let title = task.title().clone();
        let result = self.repository.update(id, TaskPatch::move_to(target)).await;
        self.settle("move task", result)?;
        info!(task_id = %id, from = %source, to = %target, "task moved");

        if target.is_terminal() && !source.is_terminal() {
            self.celebration.celebrate();
            self.notifier.notify(Notification::task_completed(&title));
        } else {
            self.notifier.notify(Notification::task_moved(&title, target));
        }
        Ok(MutationOutcome::Applied)
    }

    /// Deletes a task.
    ///
    /// The title is captured before the call so the notification can name
    /// the task after it has disappeared from the store. Returns
    /// [`MutationOutcome::Skipped`] when the task is no longer on the board.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Repository`] when loading the board or the
    /// delete fails. The task stays visible in that case.
    pub async fn delete(&self, id: &TaskId) -> MutationResult<MutationOutcome> {
        let board = self.board().await?;
        let Some(task) = board.task(id) else {
            debug!(task_id = %id, "delete skipped: task is no longer on the board");
            return Ok(MutationOutcome::Skipped);
        };

        let notification = Notification::task_deleted(task.title());
        let result = self.repository.delete(id).await;
        self.settle("delete task", result)?;
        info!(task_id = %id, "task deleted");
        self.notifier.notify(notification);
        Ok(MutationOutcome::Applied)
    }

    /// Invalidates the cache on success, or reports the failure.
    fn settle<T>(
        &self,
        action: &'static str,
        result: Result<T, TaskRepositoryError>,
    ) -> MutationResult<T> {
        match result {
            Ok(value) => {
                self.cache.invalidate();
                Ok(value)
            }
            Err(err) => Err(self.report_failure(action, err)),
        }
    }

    fn report_failure(&self, action: &'static str, err: TaskRepositoryError) -> MutationError {
        warn!(action, error = %err, "board mutation failed");
        self.notifier.notify(Notification::failure(&err));
        MutationError::Repository(err)
    }
}
