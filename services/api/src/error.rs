//! Custom error types for the chat API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::StoreError;
use serde_json::json;
use thiserror::Error;

/// Custom error type for the chat API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or rejected credentials
    #[error("{0}")]
    Unauthorized(String),

    /// Bad request with message
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,

    /// Domain error raised by a store
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            ApiError::Store(err) => match err {
                StoreError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
                StoreError::Conflict(msg) => (StatusCode::CONFLICT, msg),
                StoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
                StoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
