//! In-memory repository for categories.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::category::{
    domain::{Category, CategoryId, CategoryName, PersistedCategoryData},
    ports::{CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult},
};

/// Thread-safe in-memory category repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    state: Arc<RwLock<HashMap<CategoryId, Category>>>,
}

impl InMemoryCategoryRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(
        &self,
    ) -> CategoryRepositoryResult<RwLockReadGuard<'_, HashMap<CategoryId, Category>>> {
        self.state.read().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(
        &self,
    ) -> CategoryRepositoryResult<RwLockWriteGuard<'_, HashMap<CategoryId, Category>>> {
        self.state.write().map_err(|err| {
            CategoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn collect_sorted(
        &self,
        keep: impl Fn(&Category) -> bool,
    ) -> CategoryRepositoryResult<Vec<Category>> {
        let state = self.read()?;
        let mut categories: Vec<Category> = state
            .values()
            .filter(|category| keep(category))
            .cloned()
            .collect();
        categories.sort_by_key(|category| (category.created_at(), category.id()));
        Ok(categories)
    }
}

fn name_taken(
    state: &HashMap<CategoryId, Category>,
    name: &CategoryName,
    except: Option<CategoryId>,
) -> bool {
    state
        .values()
        .any(|existing| existing.name() == name && Some(existing.id()) != except)
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn store(&self, category: &Category) -> CategoryRepositoryResult<()> {
        let mut state = self.write()?;
        if state.contains_key(&category.id()) {
            return Err(CategoryRepositoryError::DuplicateCategory(category.id()));
        }
        if name_taken(&state, category.name(), None) {
            return Err(CategoryRepositoryError::DuplicateCategoryName(
                category.name().clone(),
            ));
        }
        state.insert(category.id(), category.clone());
        Ok(())
    }

    async fn update(&self, category: &Category) -> CategoryRepositoryResult<()> {
        let mut state = self.write()?;
        if name_taken(&state, category.name(), Some(category.id())) {
            return Err(CategoryRepositoryError::DuplicateCategoryName(
                category.name().clone(),
            ));
        }
        let Some(existing) = state.get_mut(&category.id()) else {
            return Err(CategoryRepositoryError::NotFound(category.id()));
        };
        // Deletion fields are owned by `set_deleted_at`.
        *existing = with_deleted_at(category.clone(), existing.deleted_at());
        Ok(())
    }

    async fn set_deleted_at(
        &self,
        id: CategoryId,
        deleted_at: Option<DateTime<Utc>>,
    ) -> CategoryRepositoryResult<()> {
        let mut state = self.write()?;
        let Some(existing) = state.get_mut(&id) else {
            return Err(CategoryRepositoryError::NotFound(id));
        };
        *existing = with_deleted_at(existing.clone(), deleted_at);
        Ok(())
    }

    async fn find_active(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>> {
        let state = self.read()?;
        Ok(state
            .get(&id)
            .filter(|category| !category.is_deleted())
            .cloned())
    }

    async fn find_any(&self, id: CategoryId) -> CategoryRepositoryResult<Option<Category>> {
        let state = self.read()?;
        Ok(state.get(&id).cloned())
    }

    async fn find_by_name_any(
        &self,
        name: &CategoryName,
    ) -> CategoryRepositoryResult<Option<Category>> {
        let state = self.read()?;
        Ok(state
            .values()
            .find(|category| category.name() == name)
            .cloned())
    }

    async fn list_active(&self) -> CategoryRepositoryResult<Vec<Category>> {
        self.collect_sorted(|category| !category.is_deleted())
    }

    async fn list_deleted(&self) -> CategoryRepositoryResult<Vec<Category>> {
        self.collect_sorted(Category::is_deleted)
    }

    async fn list_all(&self) -> CategoryRepositoryResult<Vec<Category>> {
        self.collect_sorted(|_| true)
    }

    async fn hard_delete(&self, id: CategoryId) -> CategoryRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .remove(&id)
            .map(|_| ())
            .ok_or(CategoryRepositoryError::NotFound(id))
    }
}

fn with_deleted_at(category: Category, deleted_at: Option<DateTime<Utc>>) -> Category {
    Category::from_persisted(PersistedCategoryData {
        id: category.id(),
        name: category.name().clone(),
        deleted_at,
        created_at: category.created_at(),
        updated_at: category.updated_at(),
    })
}
