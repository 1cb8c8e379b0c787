//! Domain model for user accounts.

mod credentials;
mod email;
mod error;
mod ids;
mod user;

pub use credentials::PasswordHash;
pub use email::EmailAddress;
pub use error::AccountDomainError;
pub use ids::{UserId, Username};
pub use user::{PersistedUserData, User};
