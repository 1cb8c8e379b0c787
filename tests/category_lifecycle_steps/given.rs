//! Given steps for category lifecycle BDD scenarios.

use super::world::{CategoryWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::services::CreateTaskRequest;

#[given(r#"a signed-in member "{username}""#)]
fn signed_in_member(world: &mut CategoryWorld, username: String) -> Result<(), eyre::Report> {
    let actor = run_async(world.app.member(&username)).wrap_err("register member")?;
    world.member = Some(actor);
    Ok(())
}

#[given(r#"a signed-in administrator "{username}""#)]
fn signed_in_administrator(
    world: &mut CategoryWorld,
    username: String,
) -> Result<(), eyre::Report> {
    let actor = run_async(world.app.staff(&username)).wrap_err("register administrator")?;
    world.admin = Some(actor);
    Ok(())
}

#[given(r#"a category named "{name}""#)]
fn category_named(world: &mut CategoryWorld, name: String) -> Result<(), eyre::Report> {
    let member = world.member()?.clone();
    let category = run_async(world.app.board.categories().create(&member, &name))
        .wrap_err("create category")?;
    world.category = Some(category);
    Ok(())
}

#[given(r#"a deleted category named "{name}""#)]
fn deleted_category_named(world: &mut CategoryWorld, name: String) -> Result<(), eyre::Report> {
    category_named(world, name)?;
    let member = world.member()?.clone();
    let id = world.category()?.id();
    let deleted = run_async(world.app.board.categories().soft_delete(&member, id))
        .wrap_err("soft delete category")?;
    world.category = Some(deleted);
    Ok(())
}

#[given(r#"a task "{title}" filed under the category"#)]
fn task_filed_under_category(world: &mut CategoryWorld, title: String) -> Result<(), eyre::Report> {
    let member = world.member()?.clone();
    let category = world.category()?.id();
    let task = run_async(world.app.board.tasks().create(
        &member,
        CreateTaskRequest::new(title).with_categories([category]),
    ))
    .wrap_err("create task")?;
    world.task = Some(task);
    Ok(())
}
