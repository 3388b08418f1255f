//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, migrations, state wiring, and the Axum
//! server lifecycle.

use crate::api::middleware::rate_limit::RateLimiter;
use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::SqliteLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Schema migrations
/// - Rate limiter (empty at every startup; admission state is not persisted)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migrations, or server bind
/// fail, or on a server runtime error.
pub async fn run(config: Config) -> Result<()> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let link_repository = Arc::new(SqliteLinkRepository::new(pool.clone()));
    let link_service = Arc::new(LinkService::new(link_repository));
    let rate_limiter = Arc::new(RateLimiter::new(
        config.rate_limit_burst,
        Duration::from_secs(config.rate_limit_window_secs),
    ));

    let state = AppState {
        db: pool,
        link_service,
        rate_limiter,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
