//! Shared world state for status notification BDD scenarios.

use crate::test_helpers::TestApp;
use rstest::fixture;
use taskboard::{access::Actor, task::domain::Task};

/// Scenario world for status notification behaviour tests.
pub struct NotificationWorld {
    pub app: TestApp,
    pub owner: Option<Actor>,
    pub task: Option<Task>,
}

impl NotificationWorld {
    /// Creates a world around a fresh application.
    #[must_use]
    pub fn new() -> Self {
        Self {
            app: TestApp::new().expect("application assembles"),
            owner: None,
            task: None,
        }
    }

    /// Returns the task owner and the task under test.
    ///
    /// # Errors
    ///
    /// Returns an error if the background steps have not run.
    pub fn owner_and_task(&self) -> Result<(Actor, Task), eyre::Report> {
        let owner = self
            .owner
            .clone()
            .ok_or_else(|| eyre::eyre!("missing owner in scenario world"))?;
        let task = self
            .task
            .clone()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
        Ok((owner, task))
    }
}

impl Default for NotificationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> NotificationWorld {
    NotificationWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
