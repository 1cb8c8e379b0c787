//! When steps for status notification BDD scenarios.

use super::world::{NotificationWorld, run_async};
use chrono::TimeDelta;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::task::{domain::TaskStatus, services::UpdateTaskRequest};

fn apply_update(
    world: &mut NotificationWorld,
    request: UpdateTaskRequest,
) -> Result<(), eyre::Report> {
    let (owner, task) = world.owner_and_task()?;
    let updated = run_async(world.app.board.tasks().update(&owner, task.id(), request))
        .wrap_err("update task")?;
    world.task = Some(updated);
    Ok(())
}

#[when(r#"the task status changes to "{status}""#)]
fn status_changes(world: &mut NotificationWorld, status: String) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    apply_update(world, UpdateTaskRequest::new().with_status(parsed))
}

#[when(r#"the task title changes to "{title}""#)]
fn title_changes(world: &mut NotificationWorld, title: String) -> Result<(), eyre::Report> {
    apply_update(world, UpdateTaskRequest::new().with_title(title))
}

#[when("{seconds:i64} seconds pass")]
fn seconds_pass(world: &mut NotificationWorld, seconds: i64) {
    world.app.clock.advance(TimeDelta::seconds(seconds));
}
