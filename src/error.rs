use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Application error taxonomy.
///
/// Every failure a caller can observe is one of these variants; all of them
/// are translated to a JSON `{"error": message}` body at the HTTP boundary.
/// Nothing here aborts the process.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Only http/https URLs are supported")]
    UnsupportedScheme,

    #[error("Invalid URL host")]
    InvalidHost,

    #[error("URL is too long (max 2048 characters)")]
    UrlTooLong,

    #[error("Custom code: 3-32 chars (A-Z, a-z, 0-9, _ or -)")]
    InvalidCodeFormat,

    #[error("That code is already taken")]
    CodeTaken,

    #[error("Could not allocate a free short code, please retry")]
    ExhaustedRetries,

    #[error("Too many requests")]
    RateLimited {
        /// Seconds until the oldest request leaves the window.
        retry_after: u64,
    },

    #[error("Short link not found")]
    NotFound,

    #[error("Database error")]
    Database(#[source] sqlx::Error),
}

impl AppError {
    /// HTTP status the variant maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnsupportedScheme
            | AppError::InvalidHost
            | AppError::UrlTooLong
            | AppError::InvalidCodeFormat => StatusCode::BAD_REQUEST,
            AppError::CodeTaken => StatusCode::CONFLICT,
            AppError::ExhaustedRetries => StatusCode::SERVICE_UNAVAILABLE,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Database(ref e) = self {
            tracing::error!(error = %e, "database error");
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };

        match self {
            AppError::RateLimited { retry_after } => (
                status,
                [(header::RETRY_AFTER, retry_after.to_string())],
                Json(body),
            )
                .into_response(),
            _ => (status, Json(body)).into_response(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    /// Maps storage errors, folding unique-key violations into [`AppError::CodeTaken`].
    ///
    /// The `urls.code` PRIMARY KEY is the only unique constraint in the schema,
    /// so a unique violation always means a short-code collision.
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::CodeTaken;
        }

        AppError::Database(e)
    }
}
