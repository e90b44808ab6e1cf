//! Cached, reconciled view of the repository's task list.

use crate::board::{
    domain::BoardState,
    ports::{TaskRepository, TaskRepositoryResult},
};
use std::sync::{Arc, PoisonError, RwLock};

/// Holds the last reconciled board until it is invalidated.
///
/// The cache is replaced wholesale and exposes no patching API: the only
/// write operation is [`TaskListCache::invalidate`], after which the next
/// read refetches from the repository.
pub struct TaskListCache<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
    slot: RwLock<CacheSlot>,
}

#[derive(Debug, Default)]
struct CacheSlot {
    generation: u64,
    board: Option<Arc<BoardState>>,
}

impl<R> TaskListCache<R>
where
    R: TaskRepository,
{
    /// Creates an empty cache over `repository`.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            slot: RwLock::new(CacheSlot::default()),
        }
    }

    /// Returns the cached board, fetching and reconciling it when absent.
    ///
    /// A fetch that completes after an invalidation is returned to the caller
    /// but not cached, so it cannot mask the newer state.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the fetch fails.
    pub async fn board(&self) -> TaskRepositoryResult<Arc<BoardState>> {
        let generation = {
            let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(board) = &slot.board {
                return Ok(Arc::clone(board));
            }
            slot.generation
        };

        let tasks = self.repository.fetch_all().await?;
        let board = Arc::new(BoardState::reconcile(tasks));
        tracing::debug!(tasks = board.tasks().len(), "task list fetched and reconciled");

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        if slot.generation == generation {
            slot.board = Some(Arc::clone(&board));
        }
        Ok(board)
    }

    /// Drops the cached board so the next read refetches.
    pub fn invalidate(&self) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        slot.generation = slot.generation.wrapping_add(1);
        slot.board = None;
    }

    /// Returns `true` when a reconciled board is cached.
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .board
            .is_some()
    }
}
