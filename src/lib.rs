//! # shortlink
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate follows a layered structure:
//!
//! - **Domain** ([`domain`]) - The link entity and the repository trait
//! - **Application** ([`application`]) - Shortening and resolution logic
//! - **Infrastructure** ([`infrastructure`]) - SQLite persistence
//! - **API** ([`api`]) - Axum handlers, DTOs, and admission middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults to a local file database
//! export DATABASE_URL="sqlite:urls.db?mode=rwc"
//!
//! cargo run
//! ```
//!
//! Shorten a URL:
//!
//! ```bash
//! curl -s localhost:3000/shorten \
//!     -H 'content-type: application/json' \
//!     -d '{"long_url": "example.com/some/page"}'
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]; see the
//! [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
