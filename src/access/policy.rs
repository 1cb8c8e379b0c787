//! Permission policies for service operations.

use super::Actor;
use crate::account::domain::UserId;
use thiserror::Error;

/// Whether an operation only reads state or changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Listing, lookup, and other side-effect-free calls.
    Read,
    /// Create, update, and delete calls.
    Write,
}

impl Operation {
    /// Returns `true` for side-effect-free operations.
    #[must_use]
    pub const fn is_safe(self) -> bool {
        matches!(self, Self::Read)
    }
}

/// Errors returned when a permission check fails.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The operation requires credentials and none were presented.
    #[error("authentication credentials were not provided")]
    Unauthenticated,
    /// The caller is authenticated but not allowed to perform the operation.
    #[error("you do not have permission to perform this action")]
    Forbidden,
}

/// Request-level permission policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessPolicy {
    /// Any caller may perform any operation.
    AllowAny,
    /// Only authenticated callers may perform any operation.
    Authenticated,
    /// Anyone may read; only authenticated callers may write.
    AuthenticatedOrReadOnly,
    /// Anyone may read; only staff may write.
    AdminOrReadOnly,
    /// Only staff may perform any operation.
    AdminOnly,
}

impl AccessPolicy {
    /// Checks whether `actor` may perform `operation` under this policy.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Unauthenticated`] when credentials are required
    /// but missing, or [`AccessError::Forbidden`] when an authenticated
    /// caller lacks staff rights.
    pub fn check(self, actor: &Actor, operation: Operation) -> Result<(), AccessError> {
        match self {
            Self::AllowAny => Ok(()),
            Self::Authenticated => require_authenticated(actor),
            Self::AuthenticatedOrReadOnly if operation.is_safe() => Ok(()),
            Self::AuthenticatedOrReadOnly => require_authenticated(actor),
            Self::AdminOrReadOnly if operation.is_safe() => Ok(()),
            Self::AdminOrReadOnly | Self::AdminOnly => require_staff(actor),
        }
    }
}

/// Object-level check: reads are open, writes require the owner.
///
/// # Errors
///
/// Returns [`AccessError::Unauthenticated`] for anonymous writers and
/// [`AccessError::Forbidden`] when the writer does not own the object.
pub fn ensure_owner_or_read_only(
    actor: &Actor,
    owner: Option<UserId>,
    operation: Operation,
) -> Result<(), AccessError> {
    if operation.is_safe() {
        return Ok(());
    }
    let caller = actor.user_id().ok_or(AccessError::Unauthenticated)?;
    if owner == Some(caller) {
        Ok(())
    } else {
        Err(AccessError::Forbidden)
    }
}

fn require_authenticated(actor: &Actor) -> Result<(), AccessError> {
    if actor.is_authenticated() {
        Ok(())
    } else {
        Err(AccessError::Unauthenticated)
    }
}

fn require_staff(actor: &Actor) -> Result<(), AccessError> {
    require_authenticated(actor)?;
    if actor.is_staff() {
        Ok(())
    } else {
        Err(AccessError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Principal;
    use crate::account::domain::Username;
    use rstest::rstest;

    fn member() -> Actor {
        Actor::Authenticated(Principal::new(
            UserId::new(),
            Username::new("member").expect("valid username"),
            false,
        ))
    }

    fn staff() -> Actor {
        Actor::Authenticated(Principal::new(
            UserId::new(),
            Username::new("admin").expect("valid username"),
            true,
        ))
    }

    #[rstest]
    #[case(AccessPolicy::AllowAny, Operation::Write, Ok(()))]
    #[case(AccessPolicy::Authenticated, Operation::Read, Err(AccessError::Unauthenticated))]
    #[case(AccessPolicy::AuthenticatedOrReadOnly, Operation::Read, Ok(()))]
    #[case(
        AccessPolicy::AuthenticatedOrReadOnly,
        Operation::Write,
        Err(AccessError::Unauthenticated)
    )]
    #[case(AccessPolicy::AdminOrReadOnly, Operation::Read, Ok(()))]
    #[case(AccessPolicy::AdminOnly, Operation::Read, Err(AccessError::Unauthenticated))]
    fn anonymous_actor_is_checked(
        #[case] policy: AccessPolicy,
        #[case] operation: Operation,
        #[case] expected: Result<(), AccessError>,
    ) {
        assert_eq!(policy.check(&Actor::Anonymous, operation), expected);
    }

    #[rstest]
    #[case(AccessPolicy::Authenticated, Ok(()))]
    #[case(AccessPolicy::AuthenticatedOrReadOnly, Ok(()))]
    #[case(AccessPolicy::AdminOrReadOnly, Err(AccessError::Forbidden))]
    #[case(AccessPolicy::AdminOnly, Err(AccessError::Forbidden))]
    fn non_staff_member_writes_are_checked(
        #[case] policy: AccessPolicy,
        #[case] expected: Result<(), AccessError>,
    ) {
        assert_eq!(policy.check(&member(), Operation::Write), expected);
    }

    #[rstest]
    fn staff_may_write_under_admin_policies() {
        assert_eq!(
            AccessPolicy::AdminOnly.check(&staff(), Operation::Write),
            Ok(())
        );
        assert_eq!(
            AccessPolicy::AdminOrReadOnly.check(&staff(), Operation::Write),
            Ok(())
        );
    }

    #[rstest]
    fn owner_check_allows_reads_from_anyone() {
        assert_eq!(
            ensure_owner_or_read_only(&Actor::Anonymous, Some(UserId::new()), Operation::Read),
            Ok(())
        );
    }

    #[rstest]
    fn owner_check_rejects_other_writers() {
        let actor = member();
        assert_eq!(
            ensure_owner_or_read_only(&actor, Some(UserId::new()), Operation::Write),
            Err(AccessError::Forbidden)
        );
        assert_eq!(
            ensure_owner_or_read_only(&actor, None, Operation::Write),
            Err(AccessError::Forbidden)
        );
    }

    #[rstest]
    fn owner_check_accepts_owner_writes() {
        let actor = member();
        let owner = actor.user_id();
        assert_eq!(
            ensure_owner_or_read_only(&actor, owner, Operation::Write),
            Ok(())
        );
    }
}
