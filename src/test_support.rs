//! Fixtures shared by unit tests across modules.

use crate::access::Actor;
use crate::account::domain::{EmailAddress, PasswordHash, User, Username};
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::Mutex;

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Starts the clock at a fixed instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Starts the clock at 2026-03-02 09:00 UTC, a Monday.
    pub fn fixed() -> Self {
        let start = Utc
            .with_ymd_and_hms(2026, 3, 2, 9, 0, 0)
            .single()
            .expect("valid fixed instant");
        Self::at(start)
    }

    /// Moves the clock forward.
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().expect("clock lock");
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }
}

/// Builds a user with an email address and the matching actor.
pub fn user_with_actor(name: &str, clock: &impl Clock) -> (User, Actor) {
    let user = User::new(
        Username::new(name).expect("valid username"),
        Some(EmailAddress::new(format!("{name}@example.com")).expect("valid email")),
        PasswordHash::create("password1").expect("valid password"),
        clock,
    );
    let actor = Actor::from(&user);
    (user, actor)
}

/// Builds a staff user and the matching actor.
pub fn staff_with_actor(name: &str, clock: &impl Clock) -> (User, Actor) {
    let (user, _) = user_with_actor(name, clock);
    let staff = user.into_staff();
    let actor = Actor::from(&staff);
    (staff, actor)
}
