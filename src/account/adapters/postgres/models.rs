//! Diesel row models for user persistence.

use super::schema::users;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Internal user identifier.
    pub id: uuid::Uuid,
    /// Unique login name.
    pub username: String,
    /// Optional notification address.
    pub email: Option<String>,
    /// Administrative flag.
    pub is_staff: bool,
    /// Encoded password digest.
    pub password_hash: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// Internal user identifier.
    pub id: uuid::Uuid,
    /// Unique login name.
    pub username: String,
    /// Optional notification address.
    pub email: Option<String>,
    /// Administrative flag.
    pub is_staff: bool,
    /// Encoded password digest.
    pub password_hash: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}
