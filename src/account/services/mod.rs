//! Application services for account registration and login.

mod accounts;

pub use accounts::{AccountService, AccountServiceError, AccountServiceResult, RegisterUserRequest};
