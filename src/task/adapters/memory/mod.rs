//! In-memory repository for tasks and subtasks.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::category::domain::CategoryId;
use crate::task::{
    domain::{SubTask, SubTaskId, Task, TaskFilter, TaskId},
    ports::{SubTaskRepository, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory repository serving both tasks and subtasks.
///
/// Both live behind one lock so deleting a task removes its subtasks
/// atomically.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    subtasks: HashMap<SubTaskId, SubTask>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state
            .read()
            .map_err(|err| TaskRepositoryError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state
            .write()
            .map_err(|err| TaskRepositoryError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let Some(existing) = state.tasks.get_mut(&task.id()) else {
            return Err(TaskRepositoryError::NotFound(task.id()));
        };
        *existing = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.tasks.remove(&id).is_none() {
            return Err(TaskRepositoryError::NotFound(id));
        }
        state.subtasks.retain(|_, subtask| subtask.task_id() != id);
        Ok(())
    }

    async fn list(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(filter.apply(state.tasks.values().cloned()))
    }

    async fn count_by_category(&self, category: CategoryId) -> TaskRepositoryResult<u64> {
        let state = self.read()?;
        let count = state
            .tasks
            .values()
            .filter(|task| task.categories().contains(&category))
            .count();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }

    async fn detach_category(&self, category: CategoryId) -> TaskRepositoryResult<u64> {
        let mut state = self.write()?;
        let mut detached = 0_u64;
        for task in state.tasks.values_mut() {
            if task.remove_category(category) {
                detached += 1;
            }
        }
        Ok(detached)
    }
}

#[async_trait]
impl SubTaskRepository for InMemoryTaskRepository {
    async fn store_subtask(&self, subtask: &SubTask) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if !state.tasks.contains_key(&subtask.task_id()) {
            return Err(TaskRepositoryError::NotFound(subtask.task_id()));
        }
        if state.subtasks.contains_key(&subtask.id()) {
            return Err(TaskRepositoryError::DuplicateSubTask(subtask.id()));
        }
        state.subtasks.insert(subtask.id(), subtask.clone());
        Ok(())
    }

    async fn update_subtask(&self, subtask: &SubTask) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let Some(existing) = state.subtasks.get_mut(&subtask.id()) else {
            return Err(TaskRepositoryError::SubTaskNotFound(subtask.id()));
        };
        *existing = subtask.clone();
        Ok(())
    }

    async fn find_subtask(&self, id: SubTaskId) -> TaskRepositoryResult<Option<SubTask>> {
        let state = self.read()?;
        Ok(state.subtasks.get(&id).cloned())
    }

    async fn delete_subtask(&self, id: SubTaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .subtasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::SubTaskNotFound(id))
    }

    async fn list_subtasks(
        &self,
        task: Option<TaskId>,
        filter: &TaskFilter,
    ) -> TaskRepositoryResult<Vec<SubTask>> {
        let state = self.read()?;
        let candidates = state
            .subtasks
            .values()
            .filter(|subtask| task.is_none_or(|parent| subtask.task_id() == parent))
            .cloned();
        Ok(filter.apply(candidates))
    }
}
