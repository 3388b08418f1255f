//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `urls` store.
///
/// Uniqueness of `code` is guaranteed by [`LinkRepository::insert`] alone:
/// the storage engine's primary-key constraint decides races, never a prior
/// read. [`LinkRepository::exists`] is only an optimistic pre-check used by
/// the random-code retry loop to skip obviously taken candidates.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Atomically creates a new short link.
    ///
    /// Two concurrent inserts of the same code cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeTaken`] if the code already exists.
    /// Returns [`AppError::Database`] on other storage errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments the click counter and stamps `last_accessed`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches `code`.
    /// Returns [`AppError::Database`] on storage errors.
    async fn increment_clicks(&self, code: &str) -> Result<(), AppError>;

    /// Returns whether a code is already present.
    ///
    /// Advisory only; the answer may be stale by the time the caller acts
    /// on it. [`LinkRepository::insert`] remains authoritative.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;
}
