//! Category lifecycle as seen through the assembled application.

use crate::test_helpers::TestApp;
use rstest::{fixture, rstest};
use taskboard::{
    category::services::CategoryServiceError,
    task::{domain::TaskFilter, services::CreateTaskRequest},
};

#[fixture]
fn app() -> TestApp {
    TestApp::new().expect("application assembles")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn soft_delete_then_restore_round_trip(app: TestApp) -> Result<(), eyre::Report> {
    let member = app.member("alice").await?;
    let categories = app.board.categories();
    let work = categories.create(&member, "Work").await?;

    categories.soft_delete(&member, work.id()).await?;
    eyre::ensure!(categories.find(work.id()).await?.is_none(), "hidden after soft delete");
    eyre::ensure!(categories.list_deleted().await?.len() == 1, "listed in deleted scope");

    let restored = categories.restore(&member, work.id()).await?;
    eyre::ensure!(restored.id() == work.id(), "restore keeps the identity");
    eyre::ensure!(restored.name() == work.name(), "restore keeps the name");
    eyre::ensure!(restored.deleted_at().is_none(), "deletion stamp cleared");
    eyre::ensure!(categories.find(work.id()).await?.is_some(), "visible after restore");
    eyre::ensure!(categories.list_deleted().await?.is_empty(), "deleted scope empty");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn hard_delete_keeps_tasks_but_drops_reference(app: TestApp) -> Result<(), eyre::Report> {
    let member = app.member("alice").await?;
    let admin = app.staff("root").await?;
    let work = app.board.categories().create(&member, "Work").await?;
    let task = app
        .board
        .tasks()
        .create(
            &member,
            CreateTaskRequest::new("Filed").with_categories([work.id()]),
        )
        .await?;

    app.board.categories().hard_delete(&admin, work.id()).await?;

    let survivor = app
        .board
        .tasks()
        .get(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task should survive hard delete"))?;
    eyre::ensure!(survivor.categories().is_empty(), "reference removed");
    let listed = app
        .board
        .tasks()
        .list(&TaskFilter::new(), app.board.page_request(None, None)?)
        .await?;
    eyre::ensure!(listed.total_count == 1, "task still listed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn members_cannot_hard_delete(app: TestApp) -> Result<(), eyre::Report> {
    let member = app.member("alice").await?;
    let work = app.board.categories().create(&member, "Work").await?;

    let result = app.board.categories().hard_delete(&member, work.id()).await;

    eyre::ensure!(
        matches!(result, Err(CategoryServiceError::Access(_))),
        "expected access error, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_count_follows_category_usage(app: TestApp) -> Result<(), eyre::Report> {
    let member = app.member("alice").await?;
    let work = app.board.categories().create(&member, "Work").await?;
    for title in ["one", "two"] {
        app.board
            .tasks()
            .create(
                &member,
                CreateTaskRequest::new(title).with_categories([work.id()]),
            )
            .await?;
    }

    let count = app.board.categories().count_tasks(work.id()).await?;

    eyre::ensure!(count.tasks_count == 2, "expected two tasks, got {}", count.tasks_count);
    eyre::ensure!(count.category_name.as_str() == "Work", "name reported");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cursor_listing_uses_configured_page_size(app: TestApp) -> Result<(), eyre::Report> {
    let member = app.member("alice").await?;
    for index in 0..8 {
        app.board
            .categories()
            .create(&member, &format!("Category {index}"))
            .await?;
        app.clock.advance(chrono::TimeDelta::seconds(1));
    }

    let size = app.board.cursor_page_size();
    let first = app.board.categories().list_active_page(None, size).await?;
    let second = app
        .board
        .categories()
        .list_active_page(first.next_cursor, size)
        .await?;

    eyre::ensure!(first.items.len() == 6, "first page holds six categories");
    eyre::ensure!(second.items.len() == 2, "second page holds the rest");
    eyre::ensure!(second.next_cursor.is_none(), "no further pages");
    Ok(())
}
