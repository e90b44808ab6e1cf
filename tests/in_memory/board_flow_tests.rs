//! End-to-end board flows through the mutation coordinator.

use super::helpers::{Harness, harness, titled};
use chrono::NaiveDate;
use rstest::rstest;
use taskboard::board::{
    config::ValidationLimits,
    domain::{ColumnId, Deadline, TaskDescription},
    services::{DragDropController, DropOutcome, MutationOutcome},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_appear_in_creation_order(harness: Harness) -> Result<(), eyre::Report> {
    let first = harness.coordinator.create(titled("First")?).await?;
    let second = harness.coordinator.create(titled("Second")?).await?;

    let board = harness.coordinator.board().await?;
    let todo = board
        .column(ColumnId::Todo)
        .ok_or_else(|| eyre::eyre!("missing To Do column"))?;
    eyre::ensure!(
        todo.task_ids() == [first, second].as_slice(),
        "unexpected order {:?}",
        todo.task_ids()
    );
    eyre::ensure!(
        harness.notifications.notifications().len() == 2,
        "one notification per create"
    );
    eyre::ensure!(
        harness.repository.task_count()? == 2,
        "store holds both tasks"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_updates_fields_in_place(harness: Harness) -> Result<(), eyre::Report> {
    let limits = ValidationLimits::default();
    let id = harness.coordinator.create(titled("Draft")?).await?;
    let date = NaiveDate::from_ymd_opt(2026, 12, 24).ok_or_else(|| eyre::eyre!("bad date"))?;
    let description = TaskDescription::new("Wrap presents", &limits)?
        .ok_or_else(|| eyre::eyre!("description should not be blank"))?;
    let fields = titled("Final")?
        .with_deadline(Deadline::on(date))
        .with_description(description);

    let outcome = harness.coordinator.edit(&id, fields).await?;

    eyre::ensure!(outcome == MutationOutcome::Applied, "edit should apply");
    let board = harness.coordinator.board().await?;
    let task = board.task(&id).ok_or_else(|| eyre::eyre!("task missing"))?;
    eyre::ensure!(task.title().as_str() == "Final", "title not updated");
    eyre::ensure!(
        task.deadline().map(|deadline| deadline.to_string()).as_deref() == Some("Dec 24, 2026"),
        "deadline not updated"
    );
    eyre::ensure!(task.column_id() == ColumnId::Todo, "edit must not move the task");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_task_and_names_it(harness: Harness) -> Result<(), eyre::Report> {
    let id = harness.coordinator.create(titled("Temporary")?).await?;

    harness.coordinator.delete(&id).await?;

    let board = harness.coordinator.board().await?;
    eyre::ensure!(!board.contains(&id), "task still on the board");
    eyre::ensure!(board.counts().total() == 0, "counts not refreshed");
    let last = harness
        .notifications
        .last()
        .ok_or_else(|| eyre::eyre!("no notification"))?;
    eyre::ensure!(
        last.description() == "Task \"Temporary\" has been deleted.",
        "unexpected text {:?}",
        last.description()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_journey_to_done(harness: Harness) -> Result<(), eyre::Report> {
    let id = harness.coordinator.create(titled("Journey")?).await?;
    let mut controller = DragDropController::new();

    for target in [ColumnId::InProgress, ColumnId::Done] {
        controller.drag_start(id.clone());
        let outcome = controller.drop_on(target, &harness.coordinator).await;
        eyre::ensure!(
            matches!(outcome, DropOutcome::Moved { .. }),
            "drop onto {target} failed: {outcome:?}"
        );
    }

    let board = harness.coordinator.board().await?;
    eyre::ensure!(board.column_of(&id) == Some(ColumnId::Done), "task not in Done");
    eyre::ensure!(harness.celebration.trigger_count() == 1, "celebrate exactly once");
    let titles: Vec<String> = harness
        .notifications
        .notifications()
        .iter()
        .map(|note| note.title().to_owned())
        .collect();
    eyre::ensure!(
        titles == ["Task Added", "Task Moved", "Task Completed!"],
        "unexpected notifications {titles:?}"
    );
    Ok(())
}
