//! Repository port for the persisted task collection.

use crate::board::domain::{NewTask, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// The repository is the single source of truth. Results of
/// [`TaskRepository::fetch_all`] need not be ordered; the board imposes its
/// own ordering.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] on transport or storage
    /// failure.
    async fn fetch_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Stores a new task, assigning its identifier and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] on storage failure.
    async fn create(&self, task: NewTask) -> TaskRepositoryResult<TaskId>;

    /// Applies a partial update to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskRepositoryResult<()>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
