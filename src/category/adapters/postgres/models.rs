//! Diesel row models for category persistence.

use super::schema::categories;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for category records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryRow {
    /// Internal category identifier.
    pub id: uuid::Uuid,
    /// Unique category name.
    pub name: String,
    /// Soft-delete flag.
    pub is_deleted: bool,
    /// Soft-delete timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last rename timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for category records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub struct NewCategoryRow {
    /// Internal category identifier.
    pub id: uuid::Uuid,
    /// Unique category name.
    pub name: String,
    /// Soft-delete flag.
    pub is_deleted: bool,
    /// Soft-delete timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last rename timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset touching only the soft-delete columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = categories)]
#[diesel(treat_none_as_null = true)]
pub struct DeletionChangeset {
    /// Soft-delete flag.
    pub is_deleted: bool,
    /// Soft-delete timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}
