//! `PostgreSQL` repository implementation for tasks and subtasks.

use super::{
    models::{NewSubTaskRow, NewTaskRow, SubTaskRow, TaskCategoryRow, TaskRow},
    schema::{subtasks, task_categories, tasks},
};
use crate::account::domain::UserId;
use crate::category::domain::CategoryId;
use crate::task::{
    domain::{
        PersistedSubTaskData, PersistedTaskData, SubTask, SubTaskId, Task, TaskFilter, TaskId,
        TaskStatus, TaskTitle,
    },
    ports::{SubTaskRepository, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::HashMap;
use uuid::Uuid;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task and subtask repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_task_row(task);
        let links = category_links(task);

        self.run_blocking(move |connection| {
            connection
                .transaction::<_, DieselError, _>(|tx| {
                    diesel::insert_into(tasks::table)
                        .values(&new_row)
                        .execute(tx)?;
                    if !links.is_empty() {
                        diesel::insert_into(task_categories::table)
                            .values(&links)
                            .execute(tx)?;
                    }
                    Ok(())
                })
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let row = to_new_task_row(task);
        let links = category_links(task);

        self.run_blocking(move |connection| {
            connection
                .transaction::<_, DieselError, _>(|tx| {
                    let updated_count =
                        diesel::update(tasks::table.filter(tasks::id.eq(row.id)))
                            .set(&row)
                            .execute(tx)?;
                    if updated_count == 0 {
                        return Err(DieselError::NotFound);
                    }
                    diesel::delete(
                        task_categories::table.filter(task_categories::task_id.eq(row.id)),
                    )
                    .execute(tx)?;
                    if !links.is_empty() {
                        diesel::insert_into(task_categories::table)
                            .values(&links)
                            .execute(tx)?;
                    }
                    Ok(())
                })
                .map_err(|err| match err {
                    DieselError::NotFound => TaskRepositoryError::NotFound(task_id),
                    _ => TaskRepositoryError::persistence(err),
                })
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            let Some(found) = row else {
                return Ok(None);
            };
            let mut links = load_category_links(connection, &[found.id])?;
            let categories = links.remove(&found.id).unwrap_or_default();
            row_to_task(found, categories).map(Some)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            // Subtasks and category links go with the task through
            // `ON DELETE CASCADE`.
            let deleted_count = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if deleted_count == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn list(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let criteria = filter.clone();
        self.run_blocking(move |connection| {
            let mut query = tasks::table.select(TaskRow::as_select()).into_boxed();
            if let Some(status) = criteria.status() {
                query = query.filter(tasks::status.eq(status.as_str()));
            }
            if let Some(deadline) = criteria.deadline() {
                query = query.filter(tasks::deadline.eq(deadline));
            }
            if let Some(owner) = criteria.owner() {
                query = query.filter(tasks::owner_id.eq(owner.into_inner()));
            }
            for term in criteria.search_terms() {
                let pattern = format!("%{term}%");
                query = query.filter(
                    tasks::title
                        .ilike(pattern.clone())
                        .or(tasks::description.ilike(pattern)),
                );
            }
            let rows = query
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
            let mut links = load_category_links(connection, &ids)?;
            let loaded = rows
                .into_iter()
                .map(|row| {
                    let categories = links.remove(&row.id).unwrap_or_default();
                    row_to_task(row, categories)
                })
                .collect::<TaskRepositoryResult<Vec<_>>>()?;
            // Weekday matching and ordering share the domain implementation.
            Ok(criteria.apply(loaded))
        })
        .await
    }

    async fn count_by_category(&self, category: CategoryId) -> TaskRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let count: i64 = task_categories::table
                .filter(task_categories::category_id.eq(category.into_inner()))
                .count()
                .get_result(connection)
                .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(count).map_err(TaskRepositoryError::invalid_persisted_data)
        })
        .await
    }

    async fn detach_category(&self, category: CategoryId) -> TaskRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(
                task_categories::table
                    .filter(task_categories::category_id.eq(category.into_inner())),
            )
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(removed).map_err(TaskRepositoryError::invalid_persisted_data)
        })
        .await
    }
}

#[async_trait]
impl SubTaskRepository for PostgresTaskRepository {
    async fn store_subtask(&self, subtask: &SubTask) -> TaskRepositoryResult<()> {
        let subtask_id = subtask.id();
        let task_id = subtask.task_id();
        let new_row = to_new_subtask_row(subtask);

        self.run_blocking(move |connection| {
            diesel::insert_into(subtasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        TaskRepositoryError::NotFound(task_id)
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateSubTask(subtask_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update_subtask(&self, subtask: &SubTask) -> TaskRepositoryResult<()> {
        let subtask_id = subtask.id();
        let row = to_new_subtask_row(subtask);

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(subtasks::table.filter(subtasks::id.eq(row.id)))
                .set(&row)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if updated_count == 0 {
                return Err(TaskRepositoryError::SubTaskNotFound(subtask_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_subtask(&self, id: SubTaskId) -> TaskRepositoryResult<Option<SubTask>> {
        self.run_blocking(move |connection| {
            let row = subtasks::table
                .filter(subtasks::id.eq(id.into_inner()))
                .select(SubTaskRow::as_select())
                .first::<SubTaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_subtask).transpose()
        })
        .await
    }

    async fn delete_subtask(&self, id: SubTaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count =
                diesel::delete(subtasks::table.filter(subtasks::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?;
            if deleted_count == 0 {
                return Err(TaskRepositoryError::SubTaskNotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn list_subtasks(
        &self,
        task: Option<TaskId>,
        filter: &TaskFilter,
    ) -> TaskRepositoryResult<Vec<SubTask>> {
        let criteria = filter.clone();
        self.run_blocking(move |connection| {
            let mut query = subtasks::table.select(SubTaskRow::as_select()).into_boxed();
            if let Some(parent) = task {
                query = query.filter(subtasks::task_id.eq(parent.into_inner()));
            }
            if let Some(status) = criteria.status() {
                query = query.filter(subtasks::status.eq(status.as_str()));
            }
            if let Some(owner) = criteria.owner() {
                query = query.filter(subtasks::owner_id.eq(owner.into_inner()));
            }
            let rows = query
                .load::<SubTaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            let loaded = rows
                .into_iter()
                .map(row_to_subtask)
                .collect::<TaskRepositoryResult<Vec<_>>>()?;
            Ok(criteria.apply(loaded))
        })
        .await
    }
}

fn load_category_links(
    connection: &mut PgConnection,
    task_ids: &[Uuid],
) -> TaskRepositoryResult<HashMap<Uuid, Vec<CategoryId>>> {
    let pairs = task_categories::table
        .filter(task_categories::task_id.eq_any(task_ids))
        .select((task_categories::task_id, task_categories::category_id))
        .order((task_categories::task_id, task_categories::category_id))
        .load::<(Uuid, Uuid)>(connection)
        .map_err(TaskRepositoryError::persistence)?;

    let mut links: HashMap<Uuid, Vec<CategoryId>> = HashMap::new();
    for (task_id, category_id) in pairs {
        links
            .entry(task_id)
            .or_default()
            .push(CategoryId::from_uuid(category_id));
    }
    Ok(links)
}

fn category_links(task: &Task) -> Vec<TaskCategoryRow> {
    task.categories()
        .iter()
        .map(|category| TaskCategoryRow {
            task_id: task.id().into_inner(),
            category_id: category.into_inner(),
        })
        .collect()
}

fn to_new_task_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().to_owned(),
        status: task.status().as_str().to_owned(),
        deadline: task.deadline(),
        owner_id: task.owner().map(UserId::into_inner),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_new_subtask_row(subtask: &SubTask) -> NewSubTaskRow {
    NewSubTaskRow {
        id: subtask.id().into_inner(),
        task_id: subtask.task_id().into_inner(),
        title: subtask.title().as_str().to_owned(),
        description: subtask.description().to_owned(),
        status: subtask.status().as_str().to_owned(),
        deadline: subtask.deadline(),
        owner_id: subtask.owner().map(UserId::into_inner),
        created_at: subtask.created_at(),
        updated_at: subtask.updated_at(),
    }
}

fn row_to_task(row: TaskRow, categories: Vec<CategoryId>) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        status,
        deadline,
        owner_id,
        created_at,
        updated_at,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        title: TaskTitle::new(title).map_err(TaskRepositoryError::invalid_persisted_data)?,
        description,
        status: TaskStatus::try_from(status.as_str())
            .map_err(TaskRepositoryError::invalid_persisted_data)?,
        deadline,
        owner: owner_id.map(UserId::from_uuid),
        categories,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}

fn row_to_subtask(row: SubTaskRow) -> TaskRepositoryResult<SubTask> {
    let SubTaskRow {
        id,
        task_id,
        title,
        description,
        status,
        deadline,
        owner_id,
        created_at,
        updated_at,
    } = row;

    let data = PersistedSubTaskData {
        id: SubTaskId::from_uuid(id),
        task_id: TaskId::from_uuid(task_id),
        title: TaskTitle::new(title).map_err(TaskRepositoryError::invalid_persisted_data)?,
        description,
        status: TaskStatus::try_from(status.as_str())
            .map_err(TaskRepositoryError::invalid_persisted_data)?,
        deadline,
        owner: owner_id.map(UserId::from_uuid),
        created_at,
        updated_at,
    };
    Ok(SubTask::from_persisted(data))
}
