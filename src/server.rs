//! HTTP service
//!
//! `GET /api/userstats?users=N` fetches N users from the configured
//! [`UserSource`] and reports on them; `PUT /api/userstats` reports on a
//! submitted payload. The representation follows the `Accept` header.

mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use tokio::net::TcpListener;

use crate::config::{DEFAULT_MAX_BODY_BYTES, ServerConfig};
use crate::error::UserStatsError;
use crate::provider::UserSource;

pub use handlers::{HealthStatus, Problem};

/// Route serving both statistics endpoints
pub const USER_STATS_PATH: &str = "/api/userstats";

/// Shared, read-only handler state
pub struct AppState<S> {
    pub source: Arc<S>,
    /// Users fetched when the request has no `users` parameter
    pub default_users: u32,
    /// Largest accepted request body
    pub max_body_bytes: usize,
    pub start_time: Instant,
}

impl<S> AppState<S> {
    pub fn new(source: S, default_users: u32) -> Self {
        AppState {
            source: Arc::new(source),
            default_users,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            start_time: Instant::now(),
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        AppState {
            source: Arc::clone(&self.source),
            default_users: self.default_users,
            max_body_bytes: self.max_body_bytes,
            start_time: self.start_time,
        }
    }
}

/// Builds the service router
pub fn router<S: UserSource>(state: AppState<S>) -> Router {
    let body_limit = state.max_body_bytes;

    Router::new()
        .route(
            USER_STATS_PATH,
            get(handlers::get_stats::<S>).put(handlers::put_stats),
        )
        .route("/health", get(handlers::health::<S>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// Parses `bind_address:port`
pub fn socket_addr(config: &ServerConfig) -> Result<SocketAddr, UserStatsError> {
    let address = format!("{}:{}", config.bind_address, config.port);
    address
        .parse()
        .map_err(|e: std::net::AddrParseError| UserStatsError::InvalidAddress {
            address: address.clone(),
            message: e.to_string(),
        })
}

/// Serves until Ctrl+C
pub async fn run<S: UserSource>(
    config: &ServerConfig,
    state: AppState<S>,
) -> Result<(), UserStatsError> {
    let addr = socket_addr(config)?;
    let listener = TcpListener::bind(addr).await?;

    log::info!("userstats listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("userstats stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    log::info!(
        "{} {} -> {} ({} ms)",
        method,
        uri,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod server_tests;
