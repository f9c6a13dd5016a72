//! Test application factory for integration tests.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use statcard::models::{AppConfig, LeetCodeStats};
use statcard::server::{build_router, create_app_state, AppState};
use statcard::services::{FetchError, StatsFetcher};

/// Canned upstream responses keyed by username
#[derive(Default)]
pub struct StaticFetcher {
    users: HashMap<String, LeetCodeStats>,
    failure: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, stats: LeetCodeStats) -> Self {
        self.users.insert(stats.profile.username.clone(), stats);
        self
    }

    /// Every fetch fails with an upstream error
    pub fn failing(detail: &str) -> Self {
        Self {
            failure: Some(detail.to_string()),
            ..Self::default()
        }
    }

    /// Usernames requested so far
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatsFetcher for StaticFetcher {
    async fn fetch(&self, username: &str) -> Result<LeetCodeStats, FetchError> {
        self.calls.lock().unwrap().push(username.to_string());
        if let Some(detail) = &self.failure {
            return Err(FetchError::Upstream(detail.clone()));
        }
        self.users
            .get(username)
            .cloned()
            .ok_or(FetchError::UserNotFound)
    }
}

/// Test application with router and direct access to the fetcher
pub struct TestApp {
    router: axum::Router,
    pub fetcher: Arc<StaticFetcher>,
}

impl TestApp {
    /// Create a test application serving canned statistics
    pub fn new(fetcher: StaticFetcher) -> Self {
        Self::with_config(AppConfig::default(), fetcher)
    }

    /// Create a test application with a custom configuration
    pub fn with_config(config: AppConfig, fetcher: StaticFetcher) -> Self {
        let fetcher = Arc::new(fetcher);
        let state = AppState::new(config, fetcher.clone());

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self { router, fetcher }
    }

    /// Create a router wired to the real upstream client at `endpoint`
    pub fn upstream_router(endpoint: &str) -> axum::Router {
        let mut config = AppConfig::default();
        config.upstream.endpoint = endpoint.to_string();
        config.upstream.timeout_secs = 5;
        let state = create_app_state(config).expect("Failed to create app state");
        build_router(state)
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        send(&self.router, Request::get(path).body(Body::empty()).unwrap()).await
    }
}

/// Send a request to a router and collect the response
pub async fn send(router: &axum::Router, request: Request<Body>) -> TestResponse {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Request failed");

    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect body")
        .to_bytes()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get a header value as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Check if response body is an SVG document
    pub fn is_svg(&self) -> bool {
        self.text().starts_with("<svg ")
    }
}
