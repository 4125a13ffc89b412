//! Error types for the Switchyard framework.

use thiserror::Error;

/// Errors raised when a route is registered.
///
/// A failed registration leaves the router unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The event type of a custom-event route is empty.
    #[error("route event type must not be empty")]
    EmptyEventType,

    /// A product-action status filter is set but empty.
    #[error("product action route status must not be empty")]
    EmptyStatus,

    /// A product-action action filter is set but empty.
    #[error("product action route action must not be empty")]
    EmptyAction,

    /// A discriminator contains whitespace.
    #[error("invalid route {field} '{value}': must not contain whitespace")]
    InvalidName {
        /// Which discriminator was rejected.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// No product-action route matched the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "no product action route for status '{}' and action '{}'",
    .status.as_deref().unwrap_or("<none>"),
    .action.as_deref().unwrap_or("<none>")
)]
pub struct ProductActionNotFound {
    /// Status carried by the unmatched request.
    pub status: Option<String>,
    /// Action identifier carried by the unmatched request.
    pub action: Option<String>,
}

/// No custom-event route matched the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no custom event route for event type '{event_type}'")]
pub struct CustomEventNotFound {
    /// Event type of the unmatched request.
    pub event_type: String,
}

/// Errors raised by [`Router::dispatch`](crate::Router::dispatch).
///
/// These are the only failures the router produces itself. Handler failures
/// travel inside the handler's output and never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// See [`ProductActionNotFound`].
    #[error(transparent)]
    ProductActionNotFound(#[from] ProductActionNotFound),

    /// See [`CustomEventNotFound`].
    #[error(transparent)]
    CustomEventNotFound(#[from] CustomEventNotFound),
}

/// Result type for registration operations.
pub type RegistrationResult<T> = Result<T, RegistrationError>;

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
