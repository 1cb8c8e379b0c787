//! Repository port for category persistence with explicit deletion scopes.
//!
//! Soft-deleted categories never appear through the active-scope methods.
//! Callers that need them choose [`CategoryRepository::list_deleted`],
//! [`CategoryRepository::list_all`], or [`CategoryRepository::find_any`]
//! deliberately.

use crate::category::domain::{Category, CategoryId, CategoryName};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for category repository operations.
pub type CategoryRepositoryResult<T> = Result<T, CategoryRepositoryError>;

/// Category persistence contract.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Stores a new category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::DuplicateCategory`] when the
    /// identifier already exists or
    /// [`CategoryRepositoryError::DuplicateCategoryName`] when any category,
    /// deleted or not, already uses the name.
    async fn store(&self, category: &Category) -> CategoryRepositoryResult<()>;

    /// Persists the name and update timestamp of an existing category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::NotFound`] when the category does
    /// not exist or [`CategoryRepositoryError::DuplicateCategoryName`] when
    /// another category uses the new name.
    async fn update(&self, category: &Category) -> CategoryRepositoryResult<()>;

    /// Persists only the deletion timestamp of a category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::NotFound`] when the category does
    /// not exist.
    async fn set_deleted_at(
        &self,
        id: CategoryId,
        deleted_at: Option<DateTime<Utc>>,
    ) -> CategoryRepositoryResult<()>;

    /// Finds an active category by identifier.
    ///
    /// Returns `None` when the category does not exist or is soft-deleted.
    async fn find_active(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>>;

    /// Finds a category by identifier regardless of deletion state.
    async fn find_any(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>>;

    /// Finds a category by name regardless of deletion state.
    async fn find_by_name_any(
        &self,
        name: &CategoryName,
    ) -> CategoryRepositoryResult<Option<Category>>;

    /// Returns active categories ordered by creation time.
    async fn list_active(&self) -> CategoryRepositoryResult<Vec<Category>>;

    /// Returns soft-deleted categories ordered by creation time.
    async fn list_deleted(&self) -> CategoryRepositoryResult<Vec<Category>>;

    /// Returns every category ordered by creation time.
    async fn list_all(&self) -> CategoryRepositoryResult<Vec<Category>>;

    /// Permanently removes a category in any state.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::NotFound`] when the category does
    /// not exist.
    async fn hard_delete(&self, id: CategoryId) -> CategoryRepositoryResult<()>;
}

/// Errors returned by category repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CategoryRepositoryError {
    /// A category with the same identifier already exists.
    #[error("duplicate category identifier: {0}")]
    DuplicateCategory(CategoryId),

    /// A category with the same name already exists.
    #[error("duplicate category name: {0}")]
    DuplicateCategoryName(CategoryName),

    /// The category was not found.
    #[error("category not found: {0}")]
    NotFound(CategoryId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CategoryRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
