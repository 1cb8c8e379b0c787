//! Listing filters, search, and ordering for tasks and subtasks.

use super::{ParseTaskOrderingError, TaskStatus, TaskTitle};
use crate::account::domain::UserId;
use chrono::{DateTime, Datelike, Utc, Weekday};
use std::cmp::Ordering;

/// Read access to the fields listing queries inspect.
pub trait WorkItem {
    /// Returns the title.
    fn title(&self) -> &TaskTitle;
    /// Returns the description.
    fn description(&self) -> &str;
    /// Returns the current status.
    fn status(&self) -> TaskStatus;
    /// Returns the deadline, if any.
    fn deadline(&self) -> Option<DateTime<Utc>>;
    /// Returns the owning user, if any.
    fn owner(&self) -> Option<UserId>;
    /// Returns the creation timestamp.
    fn created_at(&self) -> DateTime<Utc>;
}

/// Sort order for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskOrdering {
    /// Oldest first.
    CreatedAt,
    /// Newest first.
    #[default]
    CreatedAtDesc,
    /// Earliest deadline first; items without a deadline sort last.
    Deadline,
    /// Latest deadline first; items without a deadline sort last.
    DeadlineDesc,
}

impl TaskOrdering {
    /// Returns the query-string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::CreatedAtDesc => "-created_at",
            Self::Deadline => "deadline",
            Self::DeadlineDesc => "-deadline",
        }
    }

    fn compare(self, left: &impl WorkItem, right: &impl WorkItem) -> Ordering {
        let by_deadline = |descending: bool| match (left.deadline(), right.deadline()) {
            (Some(a), Some(b)) if descending => b.cmp(&a),
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        match self {
            Self::CreatedAt => left.created_at().cmp(&right.created_at()),
            Self::CreatedAtDesc => right.created_at().cmp(&left.created_at()),
            Self::Deadline => by_deadline(false)
                .then_with(|| right.created_at().cmp(&left.created_at())),
            Self::DeadlineDesc => by_deadline(true)
                .then_with(|| right.created_at().cmp(&left.created_at())),
        }
    }
}

impl TryFrom<&str> for TaskOrdering {
    type Error = ParseTaskOrderingError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "created_at" => Ok(Self::CreatedAt),
            "-created_at" => Ok(Self::CreatedAtDesc),
            "deadline" => Ok(Self::Deadline),
            "-deadline" => Ok(Self::DeadlineDesc),
            _ => Err(ParseTaskOrderingError(value.to_owned())),
        }
    }
}

/// Filter, search, and ordering criteria for listings.
///
/// An empty filter matches everything and orders newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    deadline: Option<DateTime<Utc>>,
    week_day: Option<Weekday>,
    search: Vec<String>,
    owner: Option<UserId>,
    ordering: TaskOrdering,
}

const WEEKDAY_NAMES: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

impl TaskFilter {
    /// Creates a filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to one status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts results to an exact deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Restricts results to deadlines falling on `day` (UTC).
    #[must_use]
    pub const fn with_week_day(mut self, day: Weekday) -> Self {
        self.week_day = Some(day);
        self
    }

    /// Restricts results to deadlines on the named English weekday.
    ///
    /// Names are matched case-insensitively; an unrecognised name leaves the
    /// filter unchanged.
    #[must_use]
    pub fn with_week_day_name(self, name: &str) -> Self {
        let wanted = name.trim().to_lowercase();
        match WEEKDAY_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == wanted)
        {
            Some((_, day)) => self.with_week_day(*day),
            None => self,
        }
    }

    /// Restricts results to items where every whitespace-separated word of
    /// `query` appears in the title or description, ignoring case. A blank
    /// query is ignored.
    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = query
            .into()
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        self
    }

    /// Restricts results to one owner.
    #[must_use]
    pub const fn with_owner(mut self, owner: UserId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Sets the result order.
    #[must_use]
    pub const fn with_ordering(mut self, ordering: TaskOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Returns the status restriction.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the exact deadline restriction.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the weekday restriction.
    #[must_use]
    pub const fn week_day(&self) -> Option<Weekday> {
        self.week_day
    }

    /// Returns the lowercased search terms; empty when search is unset.
    #[must_use]
    pub fn search_terms(&self) -> &[String] {
        &self.search
    }

    /// Returns the owner restriction.
    #[must_use]
    pub const fn owner(&self) -> Option<UserId> {
        self.owner
    }

    /// Returns the result order.
    #[must_use]
    pub const fn ordering(&self) -> TaskOrdering {
        self.ordering
    }

    /// Returns `true` when `item` satisfies every restriction.
    #[must_use]
    pub fn matches(&self, item: &impl WorkItem) -> bool {
        if self.status.is_some_and(|status| item.status() != status) {
            return false;
        }
        if self.deadline.is_some() && item.deadline() != self.deadline {
            return false;
        }
        if let Some(day) = self.week_day
            && item.deadline().is_none_or(|deadline| deadline.weekday() != day)
        {
            return false;
        }
        if self.owner.is_some() && item.owner() != self.owner {
            return false;
        }
        let title = item.title().as_str().to_lowercase();
        let description = item.description().to_lowercase();
        self.search
            .iter()
            .all(|term| title.contains(term.as_str()) || description.contains(term.as_str()))
    }

    /// Keeps the matching items and sorts them.
    #[must_use]
    pub fn apply<T: WorkItem>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let mut selected: Vec<T> = items.into_iter().filter(|item| self.matches(item)).collect();
        selected.sort_by(|left, right| self.ordering.compare(left, right));
        selected
    }
}
