//! Service tests for subtasks.

use std::sync::Arc;

use crate::access::{AccessError, Actor};
use crate::category::adapters::memory::InMemoryCategoryRepository;
use crate::pagination::PageRequest;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskFilter, TaskId, TaskStatus},
    ports::SubTaskRepository,
    services::{
        CreateTaskRequest, SubTaskService, TaskService, TaskServiceError, UpdateTaskRequest,
    },
};
use crate::test_support::{ManualClock, user_with_actor};
use chrono::TimeDelta;
use rstest::{fixture, rstest};

struct Harness {
    tasks: TaskService<InMemoryTaskRepository, InMemoryCategoryRepository, ManualClock>,
    subtasks: SubTaskService<InMemoryTaskRepository, ManualClock>,
    repository: Arc<InMemoryTaskRepository>,
    clock: Arc<ManualClock>,
    alice: Actor,
    bob: Actor,
}

impl Harness {
    async fn parent(&self) -> Task {
        self.tasks
            .create(&self.alice, CreateTaskRequest::new("Parent"))
            .await
            .expect("parent creation should succeed")
    }
}

#[fixture]
fn harness() -> Harness {
    let clock = Arc::new(ManualClock::fixed());
    let repository = Arc::new(InMemoryTaskRepository::new());
    let (_, alice) = user_with_actor("alice", &*clock);
    let (_, bob) = user_with_actor("bob", &*clock);
    Harness {
        tasks: TaskService::new(
            Arc::clone(&repository),
            Arc::new(InMemoryCategoryRepository::new()),
            Arc::clone(&clock),
        ),
        subtasks: SubTaskService::new(Arc::clone(&repository), Arc::clone(&clock)),
        repository,
        clock,
        alice,
        bob,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_attaches_subtask_to_parent(harness: Harness) {
    let parent = harness.parent().await;

    let subtask = harness
        .subtasks
        .create(
            &harness.alice,
            parent.id(),
            CreateTaskRequest::new("Step one").with_status(TaskStatus::Pending),
        )
        .await
        .expect("subtask creation should succeed");

    assert_eq!(subtask.task_id(), parent.id());
    assert_eq!(subtask.owner(), harness.alice.user_id());
    assert_eq!(subtask.status(), TaskStatus::Pending);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_under_missing_parent_reports_not_found(harness: Harness) {
    let missing = TaskId::new();

    let result = harness
        .subtasks
        .create(&harness.alice, missing, CreateTaskRequest::new("Orphan"))
        .await;

    assert!(matches!(result, Err(TaskServiceError::NotFound(id)) if id == missing));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn anonymous_callers_cannot_read_subtasks(harness: Harness) {
    let result = harness
        .subtasks
        .list(
            &Actor::Anonymous,
            None,
            &TaskFilter::new(),
            PageRequest::first(5).expect("valid page"),
        )
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Access(AccessError::Unauthenticated))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn only_the_owner_may_change_a_subtask(harness: Harness) {
    let parent = harness.parent().await;
    let subtask = harness
        .subtasks
        .create(&harness.alice, parent.id(), CreateTaskRequest::new("Step"))
        .await
        .expect("subtask creation should succeed");

    let update = harness
        .subtasks
        .update(
            &harness.bob,
            subtask.id(),
            UpdateTaskRequest::new().with_status(TaskStatus::Done),
        )
        .await;
    let delete = harness.subtasks.delete(&harness.bob, subtask.id()).await;

    assert!(matches!(
        update,
        Err(TaskServiceError::Access(AccessError::Forbidden))
    ));
    assert!(matches!(
        delete,
        Err(TaskServiceError::Access(AccessError::Forbidden))
    ));

    let done = harness
        .subtasks
        .update(
            &harness.alice,
            subtask.id(),
            UpdateTaskRequest::new().with_status(TaskStatus::Done),
        )
        .await
        .expect("owner may update");
    assert_eq!(done.status(), TaskStatus::Done);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_scopes_to_one_parent_and_filters(harness: Harness) {
    let first = harness.parent().await;
    let second = harness.parent().await;
    for (parent, title) in [
        (first.id(), "Alpha draft"),
        (first.id(), "Beta"),
        (second.id(), "Alpha final"),
    ] {
        harness
            .subtasks
            .create(&harness.alice, parent, CreateTaskRequest::new(title))
            .await
            .expect("subtask creation should succeed");
        harness.clock.advance(TimeDelta::seconds(1));
    }

    let page = harness
        .subtasks
        .list(
            &harness.bob,
            Some(first.id()),
            &TaskFilter::new().with_search("alpha"),
            PageRequest::first(5).expect("valid page"),
        )
        .await
        .expect("list subtasks");
    let everything = harness
        .subtasks
        .list(
            &harness.bob,
            None,
            &TaskFilter::new(),
            PageRequest::first(5).expect("valid page"),
        )
        .await
        .expect("list subtasks");

    assert_eq!(
        page.items
            .iter()
            .map(|subtask| subtask.title().as_str())
            .collect::<Vec<_>>(),
        vec!["Alpha draft"]
    );
    assert_eq!(everything.total_count, 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_parent_removes_its_subtasks(harness: Harness) {
    let parent = harness.parent().await;
    let subtask = harness
        .subtasks
        .create(&harness.alice, parent.id(), CreateTaskRequest::new("Step"))
        .await
        .expect("subtask creation should succeed");

    harness
        .tasks
        .delete(&harness.alice, parent.id())
        .await
        .expect("owner may delete");

    assert_eq!(
        harness
            .repository
            .find_subtask(subtask.id())
            .await
            .expect("lookup"),
        None
    );
    let missing = harness
        .subtasks
        .update(&harness.alice, subtask.id(), UpdateTaskRequest::new())
        .await;
    assert!(matches!(
        missing,
        Err(TaskServiceError::SubTaskNotFound(id)) if id == subtask.id()
    ));
}
