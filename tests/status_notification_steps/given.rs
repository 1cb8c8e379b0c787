//! Given steps for status notification BDD scenarios.

use super::world::{NotificationWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::services::CreateTaskRequest;

#[given(r#"a member "{username}" with an email address"#)]
fn member_with_email(world: &mut NotificationWorld, username: String) -> Result<(), eyre::Report> {
    let actor = run_async(world.app.member(&username)).wrap_err("register member")?;
    world.owner = Some(actor);
    Ok(())
}

#[given(r#"a task "{title}" owned by the member"#)]
fn task_owned_by_member(world: &mut NotificationWorld, title: String) -> Result<(), eyre::Report> {
    let owner = world
        .owner
        .clone()
        .ok_or_else(|| eyre::eyre!("missing owner in scenario world"))?;
    let task = run_async(
        world
            .app
            .board
            .tasks()
            .create(&owner, CreateTaskRequest::new(title)),
    )
    .wrap_err("create task")?;
    world.task = Some(task);
    Ok(())
}
