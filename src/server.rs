//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{extract::FromRef, routing::post, Router};
use primix_core::CancellationToken;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::AppConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Cancelled on shutdown; running coverage scans stop at their next
    /// yield point.
    pub shutdown: CancellationToken,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for CancellationToken {
    fn from_ref(state: &AppState) -> Self {
        state.shutdown.clone()
    }
}

/// Create application state from a loaded configuration.
pub fn create_app_state(config: AppConfig) -> AppState {
    AppState {
        config: Arc::new(config),
        shutdown: CancellationToken::new(),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/independence", post(api::handle_independence))
        .route("/api/ratio", post(api::handle_ratio))
        .route("/api/mix", post(api::handle_mix))
        .route("/api/coverage", post(api::handle_coverage))
        // Health check
        .route("/health", axum::routing::get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
