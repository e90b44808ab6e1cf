//! Given steps for board drag-and-drop BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::{
    domain::{ColumnId, TaskFields, TaskPatch, TaskTitle},
    ports::TaskRepository,
};

#[given(r#"a task "{title}" in column "{column}""#)]
fn task_in_column(
    world: &mut BoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let column_id = ColumnId::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let task_title = TaskTitle::new(title, &world.config.validation)
        .map_err(|err| eyre::eyre!("invalid title in scenario: {err}"))?;

    let id = run_async(world.coordinator.create(TaskFields::titled(task_title)))
        .wrap_err("create scenario task")?;
    if column_id != ColumnId::ENTRY {
        run_async(world.repository.update(&id, TaskPatch::move_to(column_id)))
            .wrap_err("place scenario task in its starting column")?;
    }

    world.coordinator.cache().invalidate();
    world.notifications.clear();
    world.current_task = Some(id);
    Ok(())
}

#[given("the task has been deleted")]
fn task_has_been_deleted(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let id = world.current_task()?.clone();
    run_async(world.coordinator.delete(&id)).wrap_err("delete scenario task")?;
    world.notifications.clear();
    Ok(())
}
