//! Error types for request construction.

use thiserror::Error;

/// Errors that can occur while building a [`JsonRequest`](crate::JsonRequest).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The payload is not valid JSON.
    #[error("failed to parse request: {0}")]
    Parse(String),

    /// The payload is valid JSON but not an object.
    #[error("request payload must be a JSON object")]
    NotAnObject,

    /// The payload has no string `type` field.
    #[error("request has no string 'type' field")]
    MissingType,
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type for request operations.
pub type RequestResult<T> = Result<T, RequestError>;
