//! Status-change mail triggered through task updates.

use crate::test_helpers::TestApp;
use chrono::TimeDelta;
use rstest::{fixture, rstest};
use taskboard::{
    notification::domain::{CHANGED_SUBJECT, CLOSED_SUBJECT},
    task::{
        domain::TaskStatus,
        services::{CreateTaskRequest, UpdateTaskRequest},
    },
};

#[fixture]
fn app() -> TestApp {
    TestApp::new().expect("application assembles")
}

fn status(status: TaskStatus) -> UpdateTaskRequest {
    UpdateTaskRequest::new().with_status(status)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creating_a_task_sends_nothing(app: TestApp) -> Result<(), eyre::Report> {
    let member = app.member("alice").await?;

    app.board
        .tasks()
        .create(
            &member,
            CreateTaskRequest::new("Quiet").with_status(TaskStatus::Done),
        )
        .await?;

    eyre::ensure!(app.sent_count()? == 0, "creation is not announced");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn closing_then_reopening_within_cooldown_sends_once(
    app: TestApp,
) -> Result<(), eyre::Report> {
    let member = app.member("alice").await?;
    let task = app
        .board
        .tasks()
        .create(&member, CreateTaskRequest::new("Report"))
        .await?;

    app.board
        .tasks()
        .update(&member, task.id(), status(TaskStatus::Done))
        .await?;
    app.clock.advance(TimeDelta::seconds(5));
    app.board
        .tasks()
        .update(&member, task.id(), status(TaskStatus::Blocked))
        .await?;

    let sent = app.outbox.sent()?;
    eyre::ensure!(sent.len() == 1, "expected one email, got {}", sent.len());
    let email = sent
        .first()
        .ok_or_else(|| eyre::eyre!("missing email"))?;
    eyre::ensure!(email.subject == CLOSED_SUBJECT, "closing subject used");
    eyre::ensure!(email.to.as_str() == "alice@example.com", "owner addressed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn change_after_cooldown_sends_again(app: TestApp) -> Result<(), eyre::Report> {
    let member = app.member("alice").await?;
    let task = app
        .board
        .tasks()
        .create(&member, CreateTaskRequest::new("Report"))
        .await?;

    app.board
        .tasks()
        .update(&member, task.id(), status(TaskStatus::InProgress))
        .await?;
    app.clock.advance(TimeDelta::seconds(31));
    app.board
        .tasks()
        .update(&member, task.id(), status(TaskStatus::Pending))
        .await?;

    let subjects: Vec<String> = app
        .outbox
        .sent()?
        .into_iter()
        .map(|email| email.subject)
        .collect();
    eyre::ensure!(
        subjects == vec![CHANGED_SUBJECT.to_owned(), CHANGED_SUBJECT.to_owned()],
        "unexpected subjects {subjects:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edits_without_status_change_send_nothing(app: TestApp) -> Result<(), eyre::Report> {
    let member = app.member("alice").await?;
    let task = app
        .board
        .tasks()
        .create(&member, CreateTaskRequest::new("Report"))
        .await?;

    app.board
        .tasks()
        .update(
            &member,
            task.id(),
            UpdateTaskRequest::new().with_title("Final report"),
        )
        .await?;

    eyre::ensure!(app.sent_count()? == 0, "title edits are not announced");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owners_without_email_are_skipped(app: TestApp) -> Result<(), eyre::Report> {
    let admin = app.staff("root").await?;
    let task = app
        .board
        .tasks()
        .create(&admin, CreateTaskRequest::new("Admin chore"))
        .await?;

    app.board
        .tasks()
        .update(&admin, task.id(), status(TaskStatus::Done))
        .await?;

    eyre::ensure!(app.sent_count()? == 0, "no address, no mail");
    Ok(())
}
