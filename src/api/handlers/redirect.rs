//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Resolving also increments the click counter and stamps
/// `last_accessed`; a transient failure of that bookkeeping does not stop
/// the redirect (see [`crate::application::services::LinkService::resolve`]).
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let long_url = state.link_service.resolve(&code).await?;

    Ok(Redirect::temporary(&long_url))
}
