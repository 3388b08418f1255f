//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com/some/path", "custom_code": "my-link" }
/// ```
///
/// `custom_code` is optional; without it a random 6-character code is
/// assigned.
///
/// # Response
///
/// ```json
/// { "code": "aB3xZ9", "long_url": "https://example.com/some/path" }
/// ```
///
/// # Errors
///
/// - `400` — URL or custom code fails validation.
/// - `409` — custom code already taken.
/// - `429` — admission denied by the rate limiter (separate middleware).
/// - `503` — random code generation exhausted its retries.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    // Treat a blank custom code the same as an absent one.
    let custom_code = payload
        .custom_code
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    let link = state.link_service.shorten(payload.long_url, custom_code).await?;

    tracing::info!(code = %link.code, "short link created");

    Ok(Json(ShortenResponse {
        code: link.code,
        long_url: link.long_url,
    }))
}
