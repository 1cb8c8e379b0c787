//! Category aggregate and its soft-delete state machine.

use super::{CategoryDomainError, CategoryId, CategoryName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state derived from a category's deletion timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryState {
    /// Visible through the default scope.
    Active,
    /// Hidden from the default scope and restorable.
    SoftDeleted,
}

impl fmt::Display for CategoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::SoftDeleted => "soft_deleted",
        })
    }
}

/// Named grouping for tasks.
///
/// The deletion flag and timestamp are a single optional value, so a
/// category is soft-deleted exactly when `deleted_at` is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: CategoryName,
    deleted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCategoryData {
    /// Persisted category identifier.
    pub id: CategoryId,
    /// Persisted category name.
    pub name: CategoryName,
    /// Persisted deletion timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Creates a new active category.
    #[must_use]
    pub fn new(name: CategoryName, clock: &impl Clock) -> Self {
        let now = clock.utc();
        Self {
            id: CategoryId::new(),
            name,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstructs a category from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCategoryData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            deleted_at: data.deleted_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the category identifier.
    #[must_use]
    pub const fn id(&self) -> CategoryId {
        self.id
    }

    /// Returns the category name.
    #[must_use]
    pub const fn name(&self) -> &CategoryName {
        &self.name
    }

    /// Returns the deletion timestamp for soft-deleted categories.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Returns `true` while the category is soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> CategoryState {
        if self.is_deleted() {
            CategoryState::SoftDeleted
        } else {
            CategoryState::Active
        }
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Renames the category.
    pub fn rename(&mut self, name: CategoryName, clock: &impl Clock) {
        self.name = name;
        self.updated_at = clock.utc();
    }

    /// Marks the category as soft-deleted.
    ///
    /// Deleting an already deleted category re-stamps `deleted_at`. Only the
    /// deletion fields change.
    pub fn soft_delete(&mut self, clock: &impl Clock) {
        self.deleted_at = Some(clock.utc());
    }

    /// Returns a soft-deleted category to the active scope.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryDomainError::NotDeleted`] when the category is
    /// already active.
    pub fn restore(&mut self) -> Result<(), CategoryDomainError> {
        if self.deleted_at.is_none() {
            return Err(CategoryDomainError::NotDeleted(self.id));
        }
        self.deleted_at = None;
        Ok(())
    }
}
