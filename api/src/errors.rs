use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::{store::StoreError, validate::ValidationError};

#[derive(Debug)]
pub enum ApiError {
    Decode(String),
    Validation(ValidationError),
    NotFound(String),
    Encode(String),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Decode(_) => "decode",
            ApiError::Validation(_) => "validation",
            ApiError::NotFound(_) => "not_found",
            ApiError::Encode(_) => "encode",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(e) => ApiError::Validation(e),
            StoreError::NotFound(id) => ApiError::NotFound(id),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Decode(rejection.body_text())
    }
}

/// Convert our custom errors to HTTP responses
///
/// The detail goes to the log with `kind` and `error` fields; callers only
/// get a short message.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let (status, message, detail) = match self {
            ApiError::Decode(detail) => (
                StatusCode::BAD_REQUEST,
                "Invalid request payload".to_string(),
                detail,
            ),
            ApiError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                format!("Validation failed: {e}"),
                e.to_string(),
            ),
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                "Post not found".to_string(),
                format!("post {id} not found"),
            ),
            ApiError::Encode(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                detail,
            ),
        };

        if status.is_server_error() {
            error!(kind, error = %detail, "request failed");
        } else {
            warn!(kind, error = %detail, "request rejected");
        }

        (
            status,
            Json(serde_json::json!({
              "error": message
            })),
        )
            .into_response()
    }
}
