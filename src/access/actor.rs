//! Caller identity.

use crate::account::domain::{User, UserId, Username};

/// Authenticated user identity carried through service calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    user_id: UserId,
    username: Username,
    is_staff: bool,
}

impl Principal {
    /// Creates a principal from its parts.
    #[must_use]
    pub const fn new(user_id: UserId, username: Username, is_staff: bool) -> Self {
        Self {
            user_id,
            username,
            is_staff,
        }
    }

    /// Returns the authenticated user's identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the authenticated user's name.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns `true` for administrative users.
    #[must_use]
    pub const fn is_staff(&self) -> bool {
        self.is_staff
    }
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self::new(user.id(), user.username().clone(), user.is_staff())
    }
}

/// The party invoking a service operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Actor {
    /// No credentials were presented.
    #[default]
    Anonymous,
    /// Credentials were verified for this principal.
    Authenticated(Principal),
}

impl Actor {
    /// Returns the principal for authenticated actors.
    #[must_use]
    pub const fn principal(&self) -> Option<&Principal> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(principal) => Some(principal),
        }
    }

    /// Returns the authenticated user's identifier, if any.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.principal().map(Principal::user_id)
    }

    /// Returns `true` when credentials were verified.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Returns `true` for authenticated administrative users.
    #[must_use]
    pub fn is_staff(&self) -> bool {
        self.principal().is_some_and(Principal::is_staff)
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self::Authenticated(Principal::from(user))
    }
}
