//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using sqlx with
//! runtime-bound queries.

pub mod sqlite_link_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
