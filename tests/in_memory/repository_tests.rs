//! In-memory repository contract tests.

use super::helpers::{TestRepository, repository, titled};
use rstest::rstest;
use taskboard::board::{
    domain::{ColumnId, NewTask, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_identifier_and_timestamp(
    repository: TestRepository,
) -> Result<(), eyre::Report> {
    let first = repository
        .create(NewTask::in_entry_column(titled("First")?))
        .await?;
    let second = repository
        .create(NewTask::in_entry_column(titled("Second")?))
        .await?;

    eyre::ensure!(first != second, "identifiers must be unique");
    let tasks = repository.fetch_all().await?;
    eyre::ensure!(tasks.len() == 2, "expected two tasks, found {}", tasks.len());
    for task in &tasks {
        eyre::ensure!(task.column_id() == ColumnId::Todo, "new tasks start in To Do");
        eyre::ensure!(task.created_at().is_some(), "store assigns created_at");
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_applies_only_supplied_fields(
    repository: TestRepository,
) -> Result<(), eyre::Report> {
    let id = repository
        .create(NewTask::in_entry_column(titled("Keep title")?))
        .await?;

    repository
        .update(&id, TaskPatch::move_to(ColumnId::InProgress))
        .await?;

    let tasks = repository.fetch_all().await?;
    let task = tasks
        .iter()
        .find(|task| task.id() == &id)
        .ok_or_else(|| eyre::eyre!("updated task missing"))?;
    eyre::ensure!(task.column_id() == ColumnId::InProgress, "column not updated");
    eyre::ensure!(task.title().as_str() == "Keep title", "title changed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_rows_report_not_found(repository: TestRepository) -> Result<(), eyre::Report> {
    let ghost = TaskId::new("ghost")?;

    let update = repository
        .update(&ghost, TaskPatch::move_to(ColumnId::Done))
        .await;
    let delete = repository.delete(&ghost).await;

    eyre::ensure!(
        matches!(update, Err(TaskRepositoryError::NotFound(ref id)) if id == &ghost),
        "expected not found on update, got {update:?}"
    );
    eyre::ensure!(
        matches!(delete, Err(TaskRepositoryError::NotFound(_))),
        "expected not found on delete, got {delete:?}"
    );
    Ok(())
}
