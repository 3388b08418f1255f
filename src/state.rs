use sqlx::SqlitePool;
use std::sync::Arc;

use crate::api::middleware::rate_limit::RateLimiter;
use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SqlitePool>,
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    pub rate_limiter: Arc<RateLimiter>,
}
