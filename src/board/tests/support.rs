//! Shared fixtures for board unit tests.

use crate::board::{
    config::ValidationLimits,
    domain::{ColumnId, NewTask, PersistedTaskData, Task, TaskFields, TaskId, TaskPatch, TaskTitle},
    ports::{Celebration, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use mockall::mock;
use std::sync::{Mutex, PoisonError};

mock! {
    pub Repository {}

    #[async_trait]
    impl TaskRepository for Repository {
        async fn fetch_all(&self) -> TaskRepositoryResult<Vec<Task>>;
        async fn create(&self, task: NewTask) -> TaskRepositoryResult<TaskId>;
        async fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskRepositoryResult<()>;
        async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()>;
    }
}

mock! {
    pub Confetti {}

    impl Celebration for Confetti {
        fn celebrate(&self);
    }
}

/// Builds a persistence error carrying `message`.
pub fn rejected(message: &str) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(message.to_owned()))
}

/// Clock that returns a controlled instant and advances by `step` per read.
pub struct TestClock {
    now: Mutex<DateTime<Utc>>,
    step: TimeDelta,
}

impl TestClock {
    pub fn frozen(start: DateTime<Utc>) -> Self {
        Self::stepping(start, TimeDelta::zero())
    }

    pub const fn stepping(start: DateTime<Utc>, step: TimeDelta) -> Self {
        Self {
            now: Mutex::new(start),
            step,
        }
    }

    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += delta;
    }
}

impl Clock for TestClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        let current = *now;
        *now += self.step;
        current
    }
}

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub fn title(value: &str) -> TaskTitle {
    TaskTitle::new(value, &ValidationLimits::default()).expect("valid fixture title")
}

pub fn fields(value: &str) -> TaskFields {
    TaskFields::titled(title(value))
}

pub fn task_id(value: &str) -> TaskId {
    TaskId::new(value).expect("valid fixture id")
}

/// Builds a stored task created `minutes` after [`epoch`], or without a
/// timestamp when `minutes` is `None`.
pub fn stored_task(id: &str, name: &str, column_id: ColumnId, minutes: Option<i64>) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: task_id(id),
        title: title(name),
        description: None,
        deadline: None,
        column_id,
        created_at: minutes.map(|offset| epoch() + TimeDelta::minutes(offset)),
    })
}
