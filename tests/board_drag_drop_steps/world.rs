//! Shared world state for board drag-and-drop BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::{InMemoryTaskRepository, RecordingNotificationSink, TimedCelebration},
    config::BoardConfig,
    domain::TaskId,
    services::{DragDropController, DropOutcome, MutationCoordinator},
};

/// Coordinator type used by the BDD world.
pub type TestCoordinator = MutationCoordinator<
    InMemoryTaskRepository,
    RecordingNotificationSink,
    TimedCelebration<DefaultClock>,
>;

/// Scenario world for drag-and-drop behaviour tests.
pub struct BoardWorld {
    pub config: BoardConfig,
    pub repository: Arc<InMemoryTaskRepository>,
    pub notifications: RecordingNotificationSink,
    pub celebration: Arc<TimedCelebration<DefaultClock>>,
    pub coordinator: TestCoordinator,
    pub controller: DragDropController,
    pub current_task: Option<TaskId>,
    pub last_drop: Option<DropOutcome>,
}

impl BoardWorld {
    /// Creates a world over an empty in-memory board.
    #[must_use]
    pub fn new() -> Self {
        let config = BoardConfig::default();
        let repository = Arc::new(InMemoryTaskRepository::new());
        let notifications = RecordingNotificationSink::new();
        let celebration = Arc::new(TimedCelebration::new(
            Arc::new(DefaultClock),
            config.celebration_duration(),
        ));
        let coordinator = MutationCoordinator::new(
            Arc::clone(&repository),
            Arc::new(notifications.clone()),
            Arc::clone(&celebration),
        );

        Self {
            config,
            repository,
            notifications,
            celebration,
            coordinator,
            controller: DragDropController::new(),
            current_task: None,
            last_drop: None,
        }
    }

    /// Returns the task the scenario is working with.
    pub fn current_task(&self) -> Result<&TaskId, eyre::Report> {
        self.current_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
