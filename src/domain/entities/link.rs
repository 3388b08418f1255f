//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A shortened URL record with click metadata.
///
/// `code` is the primary key; uniqueness is enforced by the storage layer,
/// not in application logic. `created_at` is set once at insert and never
/// mutated; only the redirect path touches `clicks` and `last_accessed`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Link {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
    pub last_accessed: Option<DateTime<Utc>>,
}

impl Link {
    /// Returns true if the link has been redirected to at least once.
    pub fn has_been_accessed(&self) -> bool {
        self.last_accessed.is_some()
    }
}

/// Input data for creating a new link.
///
/// `long_url` must already be normalized and `code` already validated or
/// generated before this struct is built.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
}
