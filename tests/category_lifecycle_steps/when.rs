//! When steps for category lifecycle BDD scenarios.

use super::world::{CategoryWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the member deletes the category")]
fn member_deletes_category(world: &mut CategoryWorld) -> Result<(), eyre::Report> {
    let member = world.member()?.clone();
    let id = world.category()?.id();
    let deleted = run_async(world.app.board.categories().soft_delete(&member, id))
        .wrap_err("soft delete category")?;
    world.category = Some(deleted);
    Ok(())
}

#[when("the member restores the category")]
fn member_restores_category(world: &mut CategoryWorld) -> Result<(), eyre::Report> {
    let member = world.member()?.clone();
    let id = world.category()?.id();
    let result = run_async(world.app.board.categories().restore(&member, id));
    if let Ok(ref restored) = result {
        world.category = Some(restored.clone());
    }
    world.last_restore = Some(result);
    Ok(())
}

#[when("the administrator hard-deletes the category")]
fn administrator_hard_deletes(world: &mut CategoryWorld) -> Result<(), eyre::Report> {
    let admin = world
        .admin
        .clone()
        .ok_or_else(|| eyre::eyre!("missing administrator in scenario world"))?;
    let id = world.category()?.id();
    run_async(world.app.board.categories().hard_delete(&admin, id))
        .wrap_err("hard delete category")?;
    Ok(())
}
