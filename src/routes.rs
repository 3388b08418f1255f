//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`   - Create a short link (rate-limited per client IP)
//! - `GET  /{code}`    - Short link redirect (public, not rate-limited)
//! - `GET  /health`    - Health check (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Sliding-window admission on the creation path only
//! - **Path normalization** - Trailing slash handling

use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::rate_limit;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let shorten_routes = Router::new()
        .route("/shorten", post(shorten_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::admission,
        ));

    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(shorten_routes)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
