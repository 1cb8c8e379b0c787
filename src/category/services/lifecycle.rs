//! Service layer for category management.
//!
//! Provides [`CategoryService`], which owns the soft-delete state machine:
//! default deletion is reversible, restore brings a category back, and a
//! staff-only hard delete removes it for good after detaching it from tasks.

use crate::access::{AccessError, AccessPolicy, Actor, Operation};
use crate::category::{
    domain::{Category, CategoryDomainError, CategoryId, CategoryName},
    ports::{CategoryRepository, CategoryRepositoryError},
};
use crate::pagination::{CursorPage, paginate_after};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Keyset position within the creation-ordered category listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryCursor {
    /// Creation timestamp of the last category seen.
    pub created_at: DateTime<Utc>,
    /// Identifier of the last category seen.
    pub id: CategoryId,
}

impl From<&Category> for CategoryCursor {
    fn from(category: &Category) -> Self {
        Self {
            created_at: category.created_at(),
            id: category.id(),
        }
    }
}

/// Number of tasks filed under a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTaskCount {
    /// Category identifier.
    pub category_id: CategoryId,
    /// Category name.
    pub category_name: CategoryName,
    /// Number of tasks referencing the category.
    pub tasks_count: u64,
    /// Whether the category is soft-deleted.
    pub is_deleted: bool,
}

/// Service-level errors for category operations.
#[derive(Debug, Error)]
pub enum CategoryServiceError {
    /// Domain validation or lifecycle transition failed.
    #[error(transparent)]
    Domain(#[from] CategoryDomainError),
    /// Category repository operation failed.
    #[error(transparent)]
    Repository(#[from] CategoryRepositoryError),
    /// Task repository operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// The caller may not perform the operation.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// No category with the identifier exists in the searched scope.
    #[error("category not found: {0}")]
    NotFound(CategoryId),
}

/// Result type for category service operations.
pub type CategoryServiceResult<T> = Result<T, CategoryServiceError>;

/// Category management and soft-delete lifecycle service.
#[derive(Clone)]
pub struct CategoryService<R, T, C>
where
    R: CategoryRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<R, T, C> CategoryService<R, T, C>
where
    R: CategoryRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new category service.
    #[must_use]
    pub const fn new(repository: Arc<R>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            repository,
            tasks,
            clock,
        }
    }

    /// Creates an active category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Access`] for anonymous callers,
    /// [`CategoryServiceError::Domain`] for an invalid name, or
    /// [`CategoryServiceError::Repository`] when the name is already used by
    /// any category, including soft-deleted ones.
    pub async fn create(&self, actor: &Actor, name: &str) -> CategoryServiceResult<Category> {
        AccessPolicy::AuthenticatedOrReadOnly.check(actor, Operation::Write)?;
        let category_name = CategoryName::new(name)?;
        if self
            .repository
            .find_by_name_any(&category_name)
            .await?
            .is_some()
        {
            return Err(CategoryRepositoryError::DuplicateCategoryName(category_name).into());
        }

        let category = Category::new(category_name, &*self.clock);
        self.repository.store(&category).await?;
        info!(category_id = %category.id(), name = %category.name(), "created category");
        Ok(category)
    }

    /// Renames an active category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::NotFound`] when no active category has
    /// the identifier, or [`CategoryServiceError::Repository`] when another
    /// category already uses the name.
    pub async fn rename(
        &self,
        actor: &Actor,
        id: CategoryId,
        name: &str,
    ) -> CategoryServiceResult<Category> {
        AccessPolicy::AuthenticatedOrReadOnly.check(actor, Operation::Write)?;
        let category_name = CategoryName::new(name)?;
        let mut category = self
            .repository
            .find_active(id)
            .await?
            .ok_or(CategoryServiceError::NotFound(id))?;

        if let Some(existing) = self.repository.find_by_name_any(&category_name).await?
            && existing.id() != id
        {
            return Err(CategoryRepositoryError::DuplicateCategoryName(category_name).into());
        }

        category.rename(category_name, &*self.clock);
        self.repository.update(&category).await?;
        Ok(category)
    }

    /// Finds an active category.
    ///
    /// Soft-deleted categories are reported as absent.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Repository`] when lookup fails.
    pub async fn find(&self, id: CategoryId) -> CategoryServiceResult<Option<Category>> {
        Ok(self.repository.find_active(id).await?)
    }

    /// Returns active categories in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Repository`] when lookup fails.
    pub async fn list_active(&self) -> CategoryServiceResult<Vec<Category>> {
        Ok(self.repository.list_active().await?)
    }

    /// Returns soft-deleted categories in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Repository`] when lookup fails.
    pub async fn list_deleted(&self) -> CategoryServiceResult<Vec<Category>> {
        Ok(self.repository.list_deleted().await?)
    }

    /// Returns every category in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Repository`] when lookup fails.
    pub async fn list_all(&self) -> CategoryServiceResult<Vec<Category>> {
        Ok(self.repository.list_all().await?)
    }

    /// Returns the page of active categories following `after`.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Repository`] when lookup fails.
    pub async fn list_active_page(
        &self,
        after: Option<CategoryCursor>,
        limit: usize,
    ) -> CategoryServiceResult<CursorPage<Category, CategoryCursor>> {
        let categories = self.repository.list_active().await?;
        Ok(paginate_after(
            categories,
            |category: &Category| CategoryCursor::from(category),
            after.as_ref(),
            limit,
        ))
    }

    /// Soft-deletes a category.
    ///
    /// Deleting an already soft-deleted category re-stamps its deletion
    /// time.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Access`] for anonymous callers or
    /// [`CategoryServiceError::NotFound`] when the category does not exist.
    pub async fn soft_delete(
        &self,
        actor: &Actor,
        id: CategoryId,
    ) -> CategoryServiceResult<Category> {
        AccessPolicy::AuthenticatedOrReadOnly.check(actor, Operation::Write)?;
        let mut category = self
            .repository
            .find_any(id)
            .await?
            .ok_or(CategoryServiceError::NotFound(id))?;

        category.soft_delete(&*self.clock);
        self.repository
            .set_deleted_at(id, category.deleted_at())
            .await?;
        info!(category_id = %id, "soft-deleted category");
        Ok(category)
    }

    /// Restores a soft-deleted category to the active scope.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::NotFound`] when the category does not
    /// exist in any state, or [`CategoryServiceError::Domain`] with
    /// [`CategoryDomainError::NotDeleted`] when it is already active.
    pub async fn restore(&self, actor: &Actor, id: CategoryId) -> CategoryServiceResult<Category> {
        AccessPolicy::AuthenticatedOrReadOnly.check(actor, Operation::Write)?;
        let mut category = self
            .repository
            .find_any(id)
            .await?
            .ok_or(CategoryServiceError::NotFound(id))?;

        category.restore()?;
        self.repository.set_deleted_at(id, None).await?;
        info!(category_id = %id, "restored category");
        Ok(category)
    }

    /// Permanently removes a category in any state.
    ///
    /// Tasks filed under the category keep existing and lose the reference.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Access`] unless the caller is staff,
    /// or [`CategoryServiceError::NotFound`] when the category does not
    /// exist.
    pub async fn hard_delete(&self, actor: &Actor, id: CategoryId) -> CategoryServiceResult<()> {
        AccessPolicy::AdminOnly.check(actor, Operation::Write)?;
        if self.repository.find_any(id).await?.is_none() {
            return Err(CategoryServiceError::NotFound(id));
        }

        let detached = self.tasks.detach_category(id).await?;
        self.repository.hard_delete(id).await?;
        info!(category_id = %id, detached_tasks = detached, "hard-deleted category");
        Ok(())
    }

    /// Counts the tasks filed under an active category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::NotFound`] when no active category has
    /// the identifier.
    pub async fn count_tasks(&self, id: CategoryId) -> CategoryServiceResult<CategoryTaskCount> {
        let category = self
            .repository
            .find_active(id)
            .await?
            .ok_or(CategoryServiceError::NotFound(id))?;
        let tasks_count = self.tasks.count_by_category(id).await?;

        Ok(CategoryTaskCount {
            category_id: category.id(),
            category_name: category.name().clone(),
            tasks_count,
            is_deleted: category.is_deleted(),
        })
    }
}
