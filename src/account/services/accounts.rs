//! Service layer for account registration and credential checks.

use crate::access::Actor;
use crate::account::{
    domain::{AccountDomainError, EmailAddress, PasswordHash, User, UserId, Username},
    ports::{UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for registering a user account.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    username: String,
    email: Option<String>,
    password: String,
    is_staff: bool,
}

impl RegisterUserRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
            password: password.into(),
            is_staff: false,
        }
    }

    /// Sets the notification address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Registers the account with administrative rights.
    #[must_use]
    pub const fn as_staff(mut self) -> Self {
        self.is_staff = true;
        self
    }
}

impl std::fmt::Debug for RegisterUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("is_staff", &self.is_staff)
            .finish_non_exhaustive()
    }
}

/// Service-level errors for account operations.
#[derive(Debug, Error)]
pub enum AccountServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
    /// The username or password did not match a registered account.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Result type for account service operations.
pub type AccountServiceResult<T> = Result<T, AccountServiceError>;

/// Account registration and login service.
#[derive(Clone)]
pub struct AccountService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> AccountService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new account service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Domain`] when the username, email, or
    /// password is invalid, or [`AccountServiceError::Repository`] when the
    /// username is taken or persistence fails.
    pub async fn register(&self, request: RegisterUserRequest) -> AccountServiceResult<User> {
        let RegisterUserRequest {
            username,
            email,
            password,
            is_staff,
        } = request;

        let valid_username = Username::new(username)?;
        let parsed_email = email
            .filter(|value| !value.trim().is_empty())
            .map(EmailAddress::new)
            .transpose()?;
        let password_hash = PasswordHash::create(&password)?;

        let mut user = User::new(valid_username, parsed_email, password_hash, &*self.clock);
        if is_staff {
            user = user.into_staff();
        }
        self.repository.store(&user).await?;
        info!(user_id = %user.id(), username = %user.username(), "registered user");
        Ok(user)
    }

    /// Verifies credentials and returns the authenticated actor.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::InvalidCredentials`] when the username
    /// is unknown or the password does not match, or
    /// [`AccountServiceError::Repository`] when lookup fails.
    pub async fn login(&self, username: &str, password: &str) -> AccountServiceResult<Actor> {
        let Ok(lookup) = Username::new(username) else {
            return Err(AccountServiceError::InvalidCredentials);
        };
        let user = self
            .repository
            .find_by_username(&lookup)
            .await?
            .ok_or(AccountServiceError::InvalidCredentials)?;

        if !user.password_hash().verify(password) {
            debug!(username = %lookup, "password mismatch");
            return Err(AccountServiceError::InvalidCredentials);
        }
        Ok(Actor::from(&user))
    }

    /// Finds an account by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Repository`] when lookup fails.
    pub async fn find_by_id(&self, id: UserId) -> AccountServiceResult<Option<User>> {
        Ok(self.repository.find_by_id(id).await?)
    }
}
