//! Shared test helpers for in-memory integration tests.

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use std::sync::{Arc, Mutex, PoisonError};
use taskboard::board::{
    adapters::memory::{InMemoryTaskRepository, RecordingNotificationSink, TimedCelebration},
    config::{BoardConfig, ValidationLimits},
    domain::{TaskFields, TaskTitle},
    services::MutationCoordinator,
};

/// Clock that advances one second every time it is read.
///
/// Gives each created task a distinct, increasing timestamp.
pub struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    /// Creates a clock starting at a fixed instant.
    pub fn new() -> Self {
        let start = Utc
            .with_ymd_and_hms(2026, 10, 1, 9, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        Self {
            now: Mutex::new(start),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        let current = *now;
        *now += TimeDelta::seconds(1);
        current
    }
}

/// Repository type used across in-memory tests.
pub type TestRepository = InMemoryTaskRepository<SteppingClock>;

/// Coordinator type used across in-memory tests.
pub type TestCoordinator =
    MutationCoordinator<TestRepository, RecordingNotificationSink, TimedCelebration<SteppingClock>>;

/// Wired board services with handles the tests can inspect.
pub struct Harness {
    pub repository: Arc<TestRepository>,
    pub notifications: RecordingNotificationSink,
    pub celebration: Arc<TimedCelebration<SteppingClock>>,
    pub coordinator: TestCoordinator,
}

/// Provides a fresh repository for each test.
#[fixture]
pub fn repository() -> TestRepository {
    InMemoryTaskRepository::with_clock(Arc::new(SteppingClock::new()))
}

/// Provides a coordinator over an empty in-memory board.
#[fixture]
pub fn harness() -> Harness {
    let clock = Arc::new(SteppingClock::new());
    let repository = Arc::new(InMemoryTaskRepository::with_clock(Arc::clone(&clock)));
    let notifications = RecordingNotificationSink::new();
    let celebration = Arc::new(TimedCelebration::new(
        clock,
        BoardConfig::default().celebration_duration(),
    ));
    let coordinator = MutationCoordinator::new(
        Arc::clone(&repository),
        Arc::new(notifications.clone()),
        Arc::clone(&celebration),
    );
    Harness {
        repository,
        notifications,
        celebration,
        coordinator,
    }
}

/// Builds form fields with only a title.
///
/// # Errors
///
/// Returns an error when the title fails validation.
pub fn titled(title: &str) -> Result<TaskFields, eyre::Report> {
    let title = TaskTitle::new(title, &ValidationLimits::default())?;
    Ok(TaskFields::titled(title))
}
