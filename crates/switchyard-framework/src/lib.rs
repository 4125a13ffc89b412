//! # Switchyard Framework
//!
//! Route registry and dispatch for platform extensions.
//!
//! This layer provides:
//! - [`Route`]s binding a predicate (event type, status, action) to a handler
//! - The [`Router`], an ordered registry with first-match dispatch
//! - Builder functions for common routes (`on_product_action`, `on_custom_event`,
//!   `on_any_custom_event`)
//! - A tower [`RouterService`] adapter
//!
//! ```rust,ignore
//! use switchyard_framework::Router;
//!
//! let mut router = Router::new();
//! router.register_custom_event_route("ping", |_: &Value| "pong")?;
//!
//! assert_eq!(router.dispatch(&json!({"type": "ping"}))?, "pong");
//! ```

pub mod error;
pub mod handler;
pub mod route;
pub mod route_builders;
pub mod router;
pub mod service;

pub use error::{
    CustomEventNotFound, DispatchError, DispatchResult, ProductActionNotFound, RegistrationError,
    RegistrationResult,
};
pub use handler::{BoxedHandler, Handler, into_handler};
pub use route::{AnyCustomEventRoute, CustomEventRoute, ProductActionRoute, Route};
pub use route_builders::{
    AnyCustomEventRouteBuilder, CustomEventRouteBuilder, ProductActionRouteBuilder,
    on_any_custom_event, on_asset_purchase_request_processing, on_custom_event, on_product_action,
};
pub use router::Router;
pub use service::RouterService;
