//! Short code generation and validation.
//!
//! Random codes are drawn from a cryptographically secure source so that
//! future codes cannot be predicted from ones already handed out.

use crate::error::AppError;
use rand::distr::{Alphanumeric, SampleString};
use regex::Regex;
use std::sync::LazyLock;

/// Length of generated short codes.
pub const CODE_LEN: usize = 6;

/// Pattern accepted for user-provided custom codes.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,32}$").unwrap());

/// Generates a random 6-character short code.
///
/// Characters are sampled uniformly from the 62-symbol alphanumeric
/// alphabet (`A-Z`, `a-z`, `0-9`) using the thread-local CSPRNG.
/// Collision handling is the caller's concern; see
/// [`crate::application::services::LinkService`].
pub fn generate_code() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), CODE_LEN)
}

/// Validates a user-provided custom short code.
///
/// Accepts 3-32 characters from `A-Z`, `a-z`, `0-9`, `_` and `-`.
///
/// # Errors
///
/// Returns [`AppError::InvalidCodeFormat`] for anything else.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::InvalidCodeFormat);
    }

    Ok(())
}
