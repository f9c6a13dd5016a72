use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::FetchError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing {0}")]
    MissingParam(&'static str),

    #[error("User not found")]
    UserNotFound,

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::MissingUsername => ApiError::MissingParam("username"),
            FetchError::UserNotFound => ApiError::UserNotFound,
            FetchError::Upstream(detail) => ApiError::Upstream(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingParam(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::UserNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Upstream(detail) => {
                // Upstream detail stays in the log
                tracing::warn!(error = %detail, "Upstream request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to fetch statistics".to_string(),
                )
            }
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
