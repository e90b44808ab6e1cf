//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::board::{
    domain::{
        ColumnId, Deadline, NewTask, PersistedTaskData, Task, TaskDescription, TaskId, TaskPatch,
        TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
///
/// The database assigns identifiers and creation timestamps through column
/// defaults.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn fetch_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            let mut loaded = Vec::with_capacity(rows.len());
            for row in rows {
                if let Some(task) = row_to_task(row) {
                    loaded.push(task);
                }
            }
            Ok(loaded)
        })
        .await
    }

    async fn create(&self, task: NewTask) -> TaskRepositoryResult<TaskId> {
        let new_row = to_new_row(task);
        self.run_blocking(move |connection| {
            let id = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(tasks::id)
                .get_result::<String>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            TaskId::new(id).map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskRepositoryResult<()> {
        let task_id = id.clone();
        let changeset = to_changeset(patch);
        self.run_blocking(move |connection| {
            let target = tasks::table.find(task_id.as_str());
            let affected = if changeset == TaskChangeset::default() {
                // Diesel rejects empty changesets; only confirm existence.
                target
                    .select(tasks::id)
                    .first::<String>(connection)
                    .optional()
                    .map_err(TaskRepositoryError::persistence)?
                    .map_or(0, |_| 1)
            } else {
                diesel::update(target)
                    .set(&changeset)
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?
            };
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let task_id = id.clone();
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.find(task_id.as_str()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }
}

pub(super) fn to_new_row(task: NewTask) -> NewTaskRow {
    let (fields, column_id) = task.into_parts();
    NewTaskRow {
        title: fields.title.as_str().to_owned(),
        description: fields
            .description
            .map(|description| description.as_str().to_owned()),
        deadline_date: fields.deadline.map(|deadline| deadline.date()),
        deadline_time: fields.deadline.and_then(|deadline| deadline.time()),
        column_id: column_id.as_str().to_owned(),
    }
}

pub(super) fn to_changeset(patch: TaskPatch) -> TaskChangeset {
    let (title, description, deadline, column_id) = patch.into_parts();
    TaskChangeset {
        title: title.map(|value| value.as_str().to_owned()),
        description: description
            .map(|value| value.map(|description| description.as_str().to_owned())),
        deadline_date: deadline.map(|value| value.map(|day| day.date())),
        deadline_time: deadline.map(|value| value.and_then(|day| day.time())),
        column_id: column_id.map(|value| value.as_str().to_owned()),
    }
}

/// Converts a row into a task.
///
/// Rows with a blank identifier or an unknown column value are skipped with a
/// warning rather than failing the whole fetch.
pub(super) fn row_to_task(row: TaskRow) -> Option<Task> {
    let TaskRow {
        id,
        title,
        description,
        deadline_date,
        deadline_time,
        column_id: persisted_column,
        created_at,
    } = row;

    let Ok(task_id) = TaskId::new(id.as_str()) else {
        tracing::warn!(column = %persisted_column, "skipping task with a blank identifier");
        return None;
    };

    let Ok(column_id) = ColumnId::try_from(persisted_column.as_str()) else {
        tracing::warn!(
            task_id = %id,
            column = %persisted_column,
            "skipping task assigned to an unknown column"
        );
        return None;
    };

    let deadline = deadline_date.map(|date| match deadline_time {
        Some(time) => Deadline::at(date, time),
        None => Deadline::on(date),
    });

    let data = PersistedTaskData {
        id: task_id,
        title: TaskTitle::from_persisted(title),
        description: description.map(TaskDescription::from_persisted),
        deadline,
        column_id,
        created_at,
    };
    Some(Task::from_persisted(data))
}
