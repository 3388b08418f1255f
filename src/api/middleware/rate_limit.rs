//! Sliding-window rate limiting for the link creation path.

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use dashmap::DashMap;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::time::Instant;

use crate::error::AppError;
use crate::state::AppState;

/// Per-client sliding-window counting limiter.
///
/// Keeps, per key, the timestamps of admitted requests inside the trailing
/// window. A request is admitted only while fewer than `burst` admitted
/// timestamps remain in the window; expired entries are pruned lazily on
/// each call, so there is no background sweep and per-key memory is bounded
/// by the burst size.
///
/// State is process-local and starts empty on every boot: the limiter is
/// best-effort and does not coordinate across instances or survive
/// restarts.
pub struct RateLimiter {
    windows: DashMap<String, Vec<Instant>>,
    burst: usize,
    window: Duration,
}

impl RateLimiter {
    /// Creates a limiter admitting at most `burst` requests per key within
    /// any trailing `window`.
    pub fn new(burst: usize, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            burst,
            window,
        }
    }

    /// Decides admission for one request under `key`.
    ///
    /// On admission the current timestamp is recorded. On denial, returns
    /// the estimated seconds until the oldest recorded request leaves the
    /// window.
    pub fn admit(&self, key: &str) -> Result<(), u64> {
        let now = Instant::now();

        let mut entry = self.windows.entry(key.to_string()).or_default();
        let timestamps = entry.value_mut();

        timestamps.retain(|t| now.duration_since(*t) < self.window);

        if timestamps.len() >= self.burst {
            let oldest = timestamps.first().copied().unwrap_or(now);
            let retry_after = (oldest + self.window).saturating_duration_since(now);
            return Err(retry_after.as_secs().max(1));
        }

        timestamps.push(now);
        Ok(())
    }
}

/// Admission middleware for the creation path.
///
/// Keys requests by client IP under the `create` operation; redirects are
/// deliberately not rate limited. Denial maps to `429` with a
/// `Retry-After` header, distinct from validation failures.
pub async fn admission(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let key = format!("create:{}", addr.ip());

    if let Err(retry_after) = state.rate_limiter.admit(&key) {
        tracing::debug!(client = %addr.ip(), retry_after, "admission denied");
        return Err(AppError::RateLimited { retry_after });
    }

    Ok(next.run(request).await)
}
