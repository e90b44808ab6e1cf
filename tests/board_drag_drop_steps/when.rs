//! When steps for board drag-and-drop BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::board::{domain::ColumnId, services::DragEffect};

#[when(r#"the task is dragged onto column "{column}""#)]
fn drag_task_onto(world: &mut BoardWorld, column: String) -> Result<(), eyre::Report> {
    let target = ColumnId::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let id = world.current_task()?.clone();

    if world.controller.drag_start(id) != DragEffect::Move
        || world.controller.drag_over(target) != DragEffect::Move
    {
        return Err(eyre::eyre!("column {target} refused the drag"));
    }
    let outcome = run_async(world.controller.drop_on(target, &world.coordinator));
    world.last_drop = Some(outcome);
    Ok(())
}
