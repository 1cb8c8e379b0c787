//! Shared world state for category lifecycle BDD scenarios.

use crate::test_helpers::TestApp;
use rstest::fixture;
use taskboard::{
    access::Actor,
    category::{domain::Category, services::CategoryServiceError},
    task::domain::Task,
};

/// Scenario world for category lifecycle behaviour tests.
pub struct CategoryWorld {
    pub app: TestApp,
    pub member: Option<Actor>,
    pub admin: Option<Actor>,
    pub category: Option<Category>,
    pub task: Option<Task>,
    pub last_restore: Option<Result<Category, CategoryServiceError>>,
}

impl CategoryWorld {
    /// Creates a world around a fresh application.
    #[must_use]
    pub fn new() -> Self {
        Self {
            app: TestApp::new().expect("application assembles"),
            member: None,
            admin: None,
            category: None,
            task: None,
            last_restore: None,
        }
    }

    /// Returns the signed-in member.
    ///
    /// # Errors
    ///
    /// Returns an error if no member signed in yet.
    pub fn member(&self) -> Result<&Actor, eyre::Report> {
        self.member
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing member in scenario world"))
    }

    /// Returns the category under test.
    ///
    /// # Errors
    ///
    /// Returns an error if no category was created yet.
    pub fn category(&self) -> Result<&Category, eyre::Report> {
        self.category
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing category in scenario world"))
    }
}

impl Default for CategoryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CategoryWorld {
    CategoryWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
