//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{Query, State},
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN},
        HeaderValue,
    },
    response::Response,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{LeetCodeCnFetcher, StatsFetcher};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub fetcher: Arc<dyn StatsFetcher>,
}

impl AppState {
    pub fn new(config: AppConfig, fetcher: Arc<dyn StatsFetcher>) -> Self {
        Self {
            config: Arc::new(config),
            fetcher,
        }
    }
}

/// Create application state backed by the LeetCode CN fetcher.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let fetcher = LeetCodeCnFetcher::new(&config.upstream)
        .map_err(|e| anyhow::anyhow!("Failed to create upstream client: {e}"))?;

    Ok(AppState::new(config, Arc::new(fetcher)))
}

/// Build the API router with all endpoints and middleware.
///
/// Every response, errors included, carries permissive CORS headers so cards
/// can be embedded from any origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/leetcode", get(handle_leetcode))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("*"),
        ))
}

// Wrapper handler to extract state components for the underlying API handler

async fn handle_leetcode(
    State(state): State<AppState>,
    query: Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    api::handle_leetcode(State(state.config), State(state.fetcher), query).await
}
