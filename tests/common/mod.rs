#![allow(dead_code)]

use chrono::{DateTime, Utc};
use shortlink::api::middleware::rate_limit::RateLimiter;
use shortlink::application::services::LinkService;
use shortlink::infrastructure::persistence::SqliteLinkRepository;
use shortlink::state::AppState;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    create_test_state_with_limits(pool, 10, Duration::from_secs(60))
}

pub fn create_test_state_with_limits(
    pool: SqlitePool,
    burst: usize,
    window: Duration,
) -> AppState {
    let pool = Arc::new(pool);
    let link_repository = Arc::new(SqliteLinkRepository::new(pool.clone()));

    AppState {
        db: pool,
        link_service: Arc::new(LinkService::new(link_repository)),
        rate_limiter: Arc::new(RateLimiter::new(burst, window)),
    }
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (code, long_url, created_at) VALUES (?1, ?2, ?3)")
        .bind(code)
        .bind(url)
        .bind(Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn fetch_clicks(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM urls WHERE code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn fetch_last_accessed(pool: &SqlitePool, code: &str) -> Option<DateTime<Utc>> {
    sqlx::query_scalar("SELECT last_accessed FROM urls WHERE code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Injects a fixed peer address so extractors relying on `ConnectInfo`
/// (the admission middleware) work under `axum_test::TestServer`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut()
            .insert(axum::extract::ConnectInfo(addr));
        self.inner.call(req)
    }
}
