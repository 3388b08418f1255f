//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_normalizer::normalize_url;

/// Bound on random-code insert attempts before giving up.
const MAX_ATTEMPTS: usize = 10;

/// Service for creating and resolving shortened links.
///
/// Orchestrates URL normalization, code assignment and persistence for the
/// creation path, and lookup plus click accounting for the redirect path.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link for `long_url`.
    ///
    /// The URL is normalized first (scheme defaulting, host and length
    /// checks). A supplied custom code is validated and inserted exactly
    /// once; a collision is the caller's problem, not a retry condition.
    /// Without a custom code, random candidates are tried until one inserts
    /// cleanly or the attempt bound is hit.
    ///
    /// Uniqueness is decided by the insert itself: the `exists` pre-check
    /// only skips candidates that are already visibly taken, and a lost
    /// race between the pre-check and the insert re-enters the loop.
    ///
    /// # Errors
    ///
    /// - [`AppError::UnsupportedScheme`] / [`AppError::InvalidHost`] /
    ///   [`AppError::UrlTooLong`] — URL fails normalization.
    /// - [`AppError::InvalidCodeFormat`] — custom code fails the pattern.
    /// - [`AppError::CodeTaken`] — custom code already exists.
    /// - [`AppError::ExhaustedRetries`] — every random candidate collided.
    pub async fn shorten(
        &self,
        long_url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        let normalized_url = normalize_url(&long_url)?;

        if let Some(custom) = custom_code {
            validate_custom_code(&custom)?;

            return self
                .link_repository
                .insert(NewLink {
                    code: custom,
                    long_url: normalized_url,
                })
                .await;
        }

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self.link_repository.exists(&code).await? {
                continue;
            }

            match self
                .link_repository
                .insert(NewLink {
                    code,
                    long_url: normalized_url.clone(),
                })
                .await
            {
                Ok(link) => return Ok(link),
                // Lost the race to a concurrent insert; pick a new candidate.
                Err(AppError::CodeTaken) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::ExhaustedRetries)
    }

    /// Resolves a short code to its destination URL, counting the click.
    ///
    /// A failed click increment is logged and swallowed: the redirect stays
    /// available even when the counter update hits a transient storage
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches `code`.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)?;

        if let Err(e) = self.link_repository.increment_clicks(code).await {
            tracing::warn!(code, error = %e, "failed to record click");
        }

        Ok(link.long_url)
    }
}
