//! Shared API request/response types
//!
//! Every response from sdx-api wraps its payload in the same envelope:
//! `{success, data?, count?, message?, error?}`. The server serializes
//! these types; sdx-cli deserializes them.

use serde::{Deserialize, Serialize};

/// The response envelope used by every endpoint
///
/// `count` is only present on list responses and always equals
/// `data.len()` there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful single-record response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: None,
            error: None,
        }
    }

    /// Successful response with a message (create path)
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: Some(message.into()),
            error: None,
        }
    }

    /// Failure envelope with a message only
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            message: Some(message.into()),
            error: None,
        }
    }

    /// Failure envelope carrying the underlying error text
    pub fn fail_with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            message: Some(message.into()),
            error: Some(error.into()),
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// Successful list response; `count` mirrors the list length
    pub fn ok_list(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(data.len()),
            data: Some(data),
            message: None,
            error: None,
        }
    }
}

/// Health check response: `{success, message, timestamp}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    /// RFC 3339 timestamp of the check
    pub timestamp: String,
}
