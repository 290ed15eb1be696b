//! Repository trait for short link data access.

use crate::domain::entities::{ClickCounters, Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable mapping from code to link record.
///
/// Every method is a single atomic operation against the backing store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with `clicks = 0` and `last_clicked = NULL`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists. Uniqueness is
    /// enforced by the store itself, so of two concurrent inserts with the same
    /// code exactly one succeeds.
    ///
    /// Returns [`AppError::Storage`] on backend errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend errors.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Atomically increments `clicks` and sets `last_clicked` to now.
    ///
    /// Returns `Ok(None)` if no link has this code. Concurrent increments on the
    /// same code are never lost.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend errors.
    async fn increment_click(&self, code: &str) -> Result<Option<ClickCounters>, AppError>;

    /// Removes a link and returns the removed record.
    ///
    /// Returns `Ok(None)` if no link has this code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend errors.
    async fn delete(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store cannot serve requests.
    async fn ping(&self) -> Result<(), AppError>;
}
