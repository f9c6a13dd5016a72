//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is a successful SVG card with cache headers
pub fn assert_svg(response: &TestResponse) {
    assert_ok(response);
    assert!(
        response.is_svg(),
        "Expected SVG document, got: {}",
        response.text().chars().take(80).collect::<String>()
    );
    assert_eq!(
        response.header("content-type"),
        Some("image/svg+xml"),
        "Expected Content-Type: image/svg+xml"
    );
    assert!(
        response
            .header("cache-control")
            .is_some_and(|v| v.starts_with("public, max-age=")),
        "Expected public Cache-Control, got {:?}",
        response.header("cache-control")
    );
}

/// Assert response carries permissive CORS headers
pub fn assert_cors(response: &TestResponse) {
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    assert_eq!(response.header("access-control-allow-headers"), Some("*"));
}

/// Assert JSON error response has expected status and message
pub fn assert_json_error(response: &TestResponse, expected: StatusCode, message: &str) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(u64::from(expected.as_u16())),
        "Full response: {}",
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert_eq!(json["error"].as_str(), Some(message));
}

/// Assert an SVG contains every fragment, reporting the first one missing
pub fn assert_contains_all(svg: &str, fragments: &[&str]) {
    for fragment in fragments {
        assert!(
            svg.contains(fragment),
            "Expected SVG to contain {fragment:?}"
        );
    }
}
