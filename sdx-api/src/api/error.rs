//! HTTP error mapping
//!
//! Converts store/validation failures into the failure envelope with the
//! status the error taxonomy assigns: not-found 404, validation 400,
//! unexpected store failure 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sdx_common::api::Envelope;
use sdx_common::Error;
use serde_json::Value;

/// API-layer error, carrying the route-specific message for the envelope
#[derive(Debug)]
pub enum ApiError {
    /// No matching document (404)
    NotFound(String),
    /// Malformed or conflicting create payload (400)
    Validation { message: String, error: String },
    /// Unexpected store or internal failure (500)
    Internal { message: String, error: String },
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    /// Wrap a common error with the message this route reports on failure
    pub fn from_common(context: &str, err: Error) -> Self {
        match err {
            Error::NotFound(detail) => ApiError::NotFound(detail),
            Error::InvalidInput(detail) => ApiError::Validation {
                message: context.to_string(),
                error: detail,
            },
            other => ApiError::Internal {
                message: context.to_string(),
                error: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, envelope) = match self {
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Envelope::<Value>::fail(message),
            ),
            ApiError::Validation { message, error } => (
                StatusCode::BAD_REQUEST,
                Envelope::<Value>::fail_with_error(message, error),
            ),
            ApiError::Internal { message, error } => {
                tracing::error!("{}: {}", message, error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Envelope::<Value>::fail_with_error(message, error),
                )
            }
        };

        (status, Json(envelope)).into_response()
    }
}
