//! Shared fixtures for integration tests.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use taskboard::{
    access::Actor,
    account::services::RegisterUserRequest,
    app::InMemoryTaskboard,
    config::AppConfig,
    notification::adapters::mail::InMemoryOutbox,
};

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Starts the clock at 2026-03-02 09:00 UTC, a Monday.
    pub fn fixed() -> Self {
        let start = Utc
            .with_ymd_and_hms(2026, 3, 2, 9, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        Self {
            now: Mutex::new(start),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// In-memory application with its observable collaborators.
pub struct TestApp {
    /// Assembled services.
    pub board: InMemoryTaskboard<InMemoryOutbox, ManualClock>,
    /// Captured outgoing mail.
    pub outbox: Arc<InMemoryOutbox>,
    /// Shared clock.
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Builds an application with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the application cannot be assembled.
    pub fn new() -> Result<Self, eyre::Report> {
        let outbox = Arc::new(InMemoryOutbox::new());
        let clock = Arc::new(ManualClock::fixed());
        let board = InMemoryTaskboard::in_memory(
            &AppConfig::default(),
            Arc::clone(&outbox),
            Arc::clone(&clock),
        )?;
        Ok(Self {
            board,
            outbox,
            clock,
        })
    }

    /// Registers a user with an email address and logs them in.
    ///
    /// # Errors
    ///
    /// Returns an error if registration or login fails.
    pub async fn member(&self, username: &str) -> Result<Actor, eyre::Report> {
        self.register(
            RegisterUserRequest::new(username, "password1")
                .with_email(format!("{username}@example.com")),
        )
        .await
    }

    /// Registers a staff user and logs them in.
    ///
    /// # Errors
    ///
    /// Returns an error if registration or login fails.
    pub async fn staff(&self, username: &str) -> Result<Actor, eyre::Report> {
        self.register(RegisterUserRequest::new(username, "password1").as_staff())
            .await
    }

    async fn register(&self, request: RegisterUserRequest) -> Result<Actor, eyre::Report> {
        let user = self.board.accounts().register(request).await?;
        let actor = self
            .board
            .accounts()
            .login(user.username().as_str(), "password1")
            .await?;
        Ok(actor)
    }

    /// Number of messages in the outbox.
    ///
    /// # Errors
    ///
    /// Returns an error if the outbox cannot be read.
    pub fn sent_count(&self) -> Result<usize, eyre::Report> {
        Ok(self.outbox.sent()?.len())
    }
}
