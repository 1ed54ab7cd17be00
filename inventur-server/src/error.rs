//! Error types for inventur-server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request body (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// inventur-common error
    #[error("Common error: {0}")]
    Common(inventur_common::Error),
}

impl From<inventur_common::Error> for ApiError {
    fn from(err: inventur_common::Error) -> Self {
        match err {
            inventur_common::Error::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Common(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Common(ref err) => {
                error!("Request failed: {}", err);
                let code = match err {
                    inventur_common::Error::Database(_) => "DATABASE_ERROR",
                    _ => "INTERNAL_ERROR",
                };
                (StatusCode::INTERNAL_SERVER_ERROR, code, err.to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
