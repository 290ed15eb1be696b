//! Link entity representing a short code mapping.

use chrono::{DateTime, Utc};

/// A stored short link with its usage counters.
///
/// `code` and `target` never change after creation. `clicks` and
/// `last_clicked` are only touched by the atomic click increment.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub code: String,
    pub target: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        target: String,
        clicks: i64,
        last_clicked: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            target,
            clicks,
            last_clicked,
            created_at,
        }
    }

    /// Returns true if the link has never been resolved.
    pub fn is_unvisited(&self) -> bool {
        self.last_clicked.is_none()
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub target: String,
}

/// Counter state returned by a click increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct ClickCounters {
    pub clicks: i64,
    pub last_clicked: DateTime<Utc>,
}
