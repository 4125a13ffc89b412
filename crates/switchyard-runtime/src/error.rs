//! Runtime error types.

use thiserror::Error;

use crate::config::ConfigError;
use switchyard_core::RequestError;
use switchyard_framework::DispatchError;

/// Errors that can occur while running an extension.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The incoming payload is not a valid request.
    #[error("Malformed request: {0}")]
    Request(#[from] RequestError),

    /// No route matched the request.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl RuntimeError {
    /// Returns true when the request simply had no matching route.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Dispatch(_))
    }
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
