//! Then steps for category lifecycle BDD scenarios.

use super::world::{CategoryWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::category::{domain::CategoryDomainError, services::CategoryServiceError};

#[then("the category is not listed as active")]
fn category_not_active(world: &CategoryWorld) -> Result<(), eyre::Report> {
    let id = world.category()?.id();
    let active = run_async(world.app.board.categories().list_active())?;
    eyre::ensure!(
        active.iter().all(|category| category.id() != id),
        "category still listed as active"
    );
    Ok(())
}

#[then("the category is listed as deleted")]
fn category_listed_deleted(world: &CategoryWorld) -> Result<(), eyre::Report> {
    let id = world.category()?.id();
    let deleted = run_async(world.app.board.categories().list_deleted())?;
    eyre::ensure!(
        deleted.iter().any(|category| category.id() == id),
        "category missing from deleted listing"
    );
    Ok(())
}

#[then("the category is listed as active")]
fn category_listed_active(world: &CategoryWorld) -> Result<(), eyre::Report> {
    let id = world.category()?.id();
    let found = run_async(world.app.board.categories().find(id))?;
    eyre::ensure!(found.is_some(), "category not found in active scope");
    Ok(())
}

#[then("the restore fails because the category is not deleted")]
fn restore_fails_not_deleted(world: &CategoryWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_restore
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing restore result"))?;
    eyre::ensure!(
        matches!(
            result,
            Err(CategoryServiceError::Domain(CategoryDomainError::NotDeleted(_)))
        ),
        "expected NotDeleted error, got {result:?}"
    );
    Ok(())
}

#[then("the category no longer exists")]
fn category_gone(world: &CategoryWorld) -> Result<(), eyre::Report> {
    let id = world.category()?.id();
    let all = run_async(world.app.board.categories().list_all())?;
    eyre::ensure!(
        all.iter().all(|category| category.id() != id),
        "category still stored"
    );
    Ok(())
}

#[then("the task has no categories")]
fn task_has_no_categories(world: &CategoryWorld) -> Result<(), eyre::Report> {
    let id = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?
        .id();
    let task = run_async(world.app.board.tasks().get(id))?
        .ok_or_else(|| eyre::eyre!("task should survive hard delete"))?;
    eyre::ensure!(task.categories().is_empty(), "task still references category");
    Ok(())
}
