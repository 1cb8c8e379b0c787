//! Task and subtask management through the assembled application.

use crate::test_helpers::TestApp;
use chrono::TimeDelta;
use mockable::Clock;
use rstest::{fixture, rstest};
use taskboard::{
    access::Actor,
    task::{
        domain::{TaskFilter, TaskOrdering, TaskStatus},
        services::{CreateTaskRequest, TaskServiceError, UpdateTaskRequest},
    },
};

#[fixture]
fn app() -> TestApp {
    TestApp::new().expect("application assembles")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn anyone_may_read_tasks(app: TestApp) -> Result<(), eyre::Report> {
    let member = app.member("alice").await?;
    let task = app
        .board
        .tasks()
        .create(&member, CreateTaskRequest::new("Public"))
        .await?;

    let read = app.board.tasks().get(task.id()).await?;
    let page = app
        .board
        .tasks()
        .list(&TaskFilter::new(), app.board.page_request(Some(1), None)?)
        .await?;

    eyre::ensure!(read == Some(task), "task readable by id");
    eyre::ensure!(page.page_size == 5, "default page size applies");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn page_size_is_capped(app: TestApp) -> Result<(), eyre::Report> {
    let request = app.board.page_request(Some(1), Some(10_000))?;

    eyre::ensure!(request.page_size() == 100, "page size capped at maximum");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filters_compose_through_the_service(app: TestApp) -> Result<(), eyre::Report> {
    let member = app.member("alice").await?;
    let tasks = app.board.tasks();
    let soon = app.clock.utc() + TimeDelta::days(1);
    let later = app.clock.utc() + TimeDelta::days(3);
    tasks
        .create(
            &member,
            CreateTaskRequest::new("Ship release")
                .with_status(TaskStatus::InProgress)
                .with_deadline(later),
        )
        .await?;
    tasks
        .create(
            &member,
            CreateTaskRequest::new("Release notes")
                .with_status(TaskStatus::InProgress)
                .with_deadline(soon),
        )
        .await?;
    tasks
        .create(&member, CreateTaskRequest::new("Unrelated"))
        .await?;

    let filter = TaskFilter::new()
        .with_status(TaskStatus::InProgress)
        .with_search("release")
        .with_ordering(TaskOrdering::Deadline);
    let page = tasks
        .list(&filter, app.board.page_request(None, None)?)
        .await?;

    let titles: Vec<&str> = page.items.iter().map(|task| task.title().as_str()).collect();
    eyre::ensure!(
        titles == vec!["Release notes", "Ship release"],
        "unexpected order {titles:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn subtasks_follow_their_parent(app: TestApp) -> Result<(), eyre::Report> {
    let member = app.member("alice").await?;
    let parent = app
        .board
        .tasks()
        .create(&member, CreateTaskRequest::new("Parent"))
        .await?;
    let subtask = app
        .board
        .subtasks()
        .create(&member, parent.id(), CreateTaskRequest::new("Child"))
        .await?;

    app.board.tasks().delete(&member, parent.id()).await?;

    let gone = app.board.subtasks().get(&member, subtask.id()).await?;
    eyre::ensure!(gone.is_none(), "subtask removed with parent");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn anonymous_callers_cannot_change_tasks(app: TestApp) -> Result<(), eyre::Report> {
    let member = app.member("alice").await?;
    let task = app
        .board
        .tasks()
        .create(&member, CreateTaskRequest::new("Guarded"))
        .await?;

    let result = app
        .board
        .tasks()
        .update(
            &Actor::Anonymous,
            task.id(),
            UpdateTaskRequest::new().with_status(TaskStatus::Done),
        )
        .await;

    eyre::ensure!(
        matches!(result, Err(TaskServiceError::Access(_))),
        "expected access error, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn statistics_count_overdue_tasks(app: TestApp) -> Result<(), eyre::Report> {
    let member = app.member("alice").await?;
    let deadline = app.clock.utc() + TimeDelta::hours(1);
    let task = app
        .board
        .tasks()
        .create(
            &member,
            CreateTaskRequest::new("Due soon").with_deadline(deadline),
        )
        .await?;
    app.clock.advance(TimeDelta::hours(2));

    let before = app.board.tasks().statistics(&member).await?;
    app.board
        .tasks()
        .update(
            &member,
            task.id(),
            UpdateTaskRequest::new().with_status(TaskStatus::Done),
        )
        .await?;
    let after = app.board.tasks().statistics(&member).await?;

    eyre::ensure!(before.overdue_tasks == 1, "overdue while open");
    eyre::ensure!(after.overdue_tasks == 0, "done tasks are never overdue");
    Ok(())
}
