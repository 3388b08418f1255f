//! URL normalization.
//!
//! Brings every submitted URL to a canonical absolute form before it is
//! persisted: whitespace trimmed, a missing scheme defaulted to `https`,
//! scheme restricted to http/https, host required, length bounded.

use crate::error::AppError;
use url::Url;

/// Maximum accepted URL length, measured after normalization.
pub const MAX_URL_LEN: usize = 2048;

/// Normalizes a raw URL to its canonical form.
///
/// # Rules
///
/// 1. Surrounding whitespace is trimmed.
/// 2. Input without a scheme gets `https://` prepended
///    (`example.com/x` becomes `https://example.com/x`).
/// 3. Scheme must be `http` or `https`; `javascript:`, `data:`, `ftp:`
///    and friends are rejected.
/// 4. A host component is required.
/// 5. The normalized form must not exceed [`MAX_URL_LEN`] characters.
///
/// Parsing via [`Url`] also lowercases the scheme and host and drops
/// default ports as a side effect of serialization.
///
/// # Errors
///
/// [`AppError::UnsupportedScheme`], [`AppError::InvalidHost`] or
/// [`AppError::UrlTooLong`].
pub fn normalize_url(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();

    let url = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{trimmed}")).map_err(|_| AppError::InvalidHost)?
        }
        Err(_) => return Err(AppError::InvalidHost),
    };

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(AppError::UnsupportedScheme),
    }

    if url.host_str().is_none() {
        return Err(AppError::InvalidHost);
    }

    let normalized = url.to_string();
    if normalized.len() > MAX_URL_LEN {
        return Err(AppError::UrlTooLong);
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepends_https_when_scheme_missing() {
        assert_eq!(
            normalize_url("example.com/x").unwrap(),
            "https://example.com/x"
        );
        assert_eq!(
            normalize_url("no-scheme.example/path").unwrap(),
            "https://no-scheme.example/path"
        );
    }

    #[test]
    fn test_keeps_explicit_http_scheme() {
        assert_eq!(
            normalize_url("http://example.com/x").unwrap(),
            "http://example.com/x"
        );
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(
            normalize_url("  https://example.com/x \n").unwrap(),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_lowercases_scheme_and_host() {
        assert_eq!(
            normalize_url("HTTPS://EXAMPLE.COM/Path").unwrap(),
            "https://example.com/Path"
        );
    }

    #[test]
    fn test_preserves_query_parameters() {
        assert_eq!(
            normalize_url("https://example.com/search?q=rust&lang=en").unwrap(),
            "https://example.com/search?q=rust&lang=en"
        );
    }

    #[test]
    fn test_keeps_custom_port() {
        assert_eq!(
            normalize_url("http://example.com:8080/api").unwrap(),
            "http://example.com:8080/api"
        );
    }

    #[test]
    fn test_rejects_ftp_scheme() {
        assert!(matches!(
            normalize_url("ftp://example.com/file.txt").unwrap_err(),
            AppError::UnsupportedScheme
        ));
    }

    #[test]
    fn test_rejects_javascript_scheme() {
        assert!(matches!(
            normalize_url("javascript:alert('xss')").unwrap_err(),
            AppError::UnsupportedScheme
        ));
    }

    #[test]
    fn test_rejects_file_scheme() {
        assert!(matches!(
            normalize_url("file:///etc/passwd").unwrap_err(),
            AppError::UnsupportedScheme
        ));
    }

    #[test]
    fn test_rejects_data_scheme() {
        assert!(matches!(
            normalize_url("data:text/plain,hello").unwrap_err(),
            AppError::UnsupportedScheme
        ));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(matches!(
            normalize_url("").unwrap_err(),
            AppError::InvalidHost
        ));
        assert!(matches!(
            normalize_url("   ").unwrap_err(),
            AppError::InvalidHost
        ));
    }

    #[test]
    fn test_rejects_missing_host() {
        assert!(matches!(
            normalize_url("https:///path-only").unwrap_err(),
            AppError::InvalidHost
        ));
    }

    #[test]
    fn test_rejects_overlong_url() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LEN));
        assert!(matches!(
            normalize_url(&url).unwrap_err(),
            AppError::UrlTooLong
        ));
    }

    #[test]
    fn test_accepts_url_at_the_limit() {
        // "https://example.com/" is 20 chars; pad the path up to exactly 2048.
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LEN - 20));
        let normalized = normalize_url(&url).unwrap();
        assert_eq!(normalized.len(), MAX_URL_LEN);
    }

    #[test]
    fn test_scheme_less_input_is_length_checked_after_normalization() {
        // Fits as submitted, exceeds the limit once "https://" is prepended.
        let url = format!("example.com/{}", "a".repeat(MAX_URL_LEN - 15));
        assert!(matches!(
            normalize_url(&url).unwrap_err(),
            AppError::UrlTooLong
        ));
    }
}
