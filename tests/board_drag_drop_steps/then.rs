//! Then steps for board drag-and-drop BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskboard::board::{
    domain::ColumnId,
    services::{DragState, DropOutcome},
};

#[then(r#"the task is in column "{column}""#)]
fn task_is_in_column(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let expected = ColumnId::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let id = world.current_task()?;
    let board = run_async(world.coordinator.board()).wrap_err("load board")?;

    let actual = board
        .column_of(id)
        .ok_or_else(|| eyre::eyre!("task {id} is not on the board"))?;
    if actual != expected {
        return Err(eyre::eyre!("expected column {expected}, found {actual}"));
    }
    if world.controller.state() != &DragState::Idle {
        return Err(eyre::eyre!("drag controller did not return to idle"));
    }
    Ok(())
}

#[then(r#"the last notification is titled "{title}""#)]
fn last_notification_titled(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let last = world
        .notifications
        .last()
        .ok_or_else(|| eyre::eyre!("no notification was posted"))?;
    if last.title() != title {
        return Err(eyre::eyre!(
            "expected notification {title:?}, got {:?}",
            last.title()
        ));
    }
    Ok(())
}

#[then(r#"the last notification mentions "{text}""#)]
fn last_notification_mentions(world: &BoardWorld, text: String) -> Result<(), eyre::Report> {
    let last = world
        .notifications
        .last()
        .ok_or_else(|| eyre::eyre!("no notification was posted"))?;
    if !last.description().contains(&text) {
        return Err(eyre::eyre!(
            "expected {:?} to mention {text:?}",
            last.description()
        ));
    }
    Ok(())
}

#[then("no notification has been posted")]
fn no_notification(world: &BoardWorld) -> Result<(), eyre::Report> {
    let posted = world.notifications.notifications();
    if !posted.is_empty() {
        return Err(eyre::eyre!("expected no notifications, got {posted:?}"));
    }
    Ok(())
}

#[then("the celebration count is {count:u64}")]
fn celebration_count(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    let fired = world.celebration.trigger_count();
    if fired != count {
        return Err(eyre::eyre!("expected {count} celebrations, got {fired}"));
    }
    Ok(())
}

#[then("the drop is skipped")]
fn drop_is_skipped(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_drop {
        Some(DropOutcome::Skipped(_)) => Ok(()),
        other => Err(eyre::eyre!("expected a skipped drop, got {other:?}")),
    }
}
