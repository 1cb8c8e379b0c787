//! User account aggregate.

use super::{EmailAddress, PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Registered user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    email: Option<EmailAddress>,
    is_staff: bool,
    password_hash: PasswordHash,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted username.
    pub username: Username,
    /// Persisted email address, if any.
    pub email: Option<EmailAddress>,
    /// Persisted staff flag.
    pub is_staff: bool,
    /// Persisted password digest.
    pub password_hash: PasswordHash,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new non-staff user.
    #[must_use]
    pub fn new(
        username: Username,
        email: Option<EmailAddress>,
        password_hash: PasswordHash,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: UserId::new(),
            username,
            email,
            is_staff: false,
            password_hash,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            username: data.username,
            email: data.email,
            is_staff: data.is_staff,
            password_hash: data.password_hash,
            created_at: data.created_at,
        }
    }

    /// Grants administrative rights.
    #[must_use]
    pub const fn into_staff(mut self) -> Self {
        self.is_staff = true;
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the email address, if one was provided.
    #[must_use]
    pub const fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Returns `true` for administrative users.
    #[must_use]
    pub const fn is_staff(&self) -> bool {
        self.is_staff
    }

    /// Returns the stored password digest.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
