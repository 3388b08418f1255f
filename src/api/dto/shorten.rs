//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten; a missing scheme defaults to `https`.
    pub long_url: String,

    /// Optional custom short code (3-32 chars, `A-Za-z0-9_-`).
    pub custom_code: Option<String>,
}

/// Successful shortening result.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub long_url: String,
}
