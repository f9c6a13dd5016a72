//! Mock GraphQL server standing in for the upstream statistics API.

use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const GRAPHQL_PATH: &str = "/graphql/";

/// Wrapper around wiremock MockServer with convenience methods
pub struct MockGraphQlServer {
    pub server: MockServer,
}

impl MockGraphQlServer {
    /// Start a new mock server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// GraphQL endpoint URL to configure the fetcher with
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.server.uri(), GRAPHQL_PATH)
    }

    /// Answer queries for `username` with a JSON body
    pub async fn mock_user(&self, username: &str, response: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({ "variables": { "username": username } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .mount(&self.server)
            .await;
    }

    /// Answer every query with an HTTP error status
    pub async fn mock_status(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream unavailable"))
            .mount(&self.server)
            .await;
    }

    /// Answer every query with a body that is not JSON
    pub async fn mock_garbage(&self) {
        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html>maintenance</html>")
                    .insert_header("content-type", "text/html"),
            )
            .mount(&self.server)
            .await;
    }

    /// Number of requests the server has received
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}
