//! Route builder functions for the platform's event categories.
//!
//! # Example
//!
//! ```rust,ignore
//! use switchyard_framework::{Router, on_custom_event, on_product_action};
//!
//! let router = Router::new()
//!     .with_route(on_product_action().status("approved").action("activate").handler(activate))?
//!     .with_route(on_custom_event("ping").handler(pong))?;
//! ```

use switchyard_core::ASSET_PURCHASE_REQUEST_PROCESSING;

use crate::handler::{Handler, into_handler};
use crate::route::{AnyCustomEventRoute, CustomEventRoute, ProductActionRoute, Route};

/// Builder returned by [`on_product_action`].
#[derive(Debug, Clone, Default)]
pub struct ProductActionRouteBuilder {
    status: Option<String>,
    action: Option<String>,
}

impl ProductActionRouteBuilder {
    /// Only match requests whose object has this status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Only match requests invoking this action.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Binds the handler and returns the finished route.
    pub fn handler<R, O, H>(self, handler: H) -> Route<R, O>
    where
        H: Handler<R, O> + 'static,
    {
        ProductActionRoute::new(self.status, self.action, into_handler(handler)).into()
    }
}

/// Builder returned by [`on_custom_event`].
#[derive(Debug, Clone)]
pub struct CustomEventRouteBuilder {
    event_type: String,
}

impl CustomEventRouteBuilder {
    /// Binds the handler and returns the finished route.
    pub fn handler<R, O, H>(self, handler: H) -> Route<R, O>
    where
        H: Handler<R, O> + 'static,
    {
        CustomEventRoute::new(self.event_type, into_handler(handler)).into()
    }
}

/// Builder returned by [`on_any_custom_event`].
#[derive(Debug, Clone, Default)]
pub struct AnyCustomEventRouteBuilder;

impl AnyCustomEventRouteBuilder {
    /// Binds the handler and returns the finished route.
    pub fn handler<R, O, H>(self, handler: H) -> Route<R, O>
    where
        H: Handler<R, O> + 'static,
    {
        AnyCustomEventRoute::new(into_handler(handler)).into()
    }
}

/// Starts a route for `product_action` requests.
///
/// Without `.status(..)` or `.action(..)` the route matches every product
/// action.
pub fn on_product_action() -> ProductActionRouteBuilder {
    ProductActionRouteBuilder::default()
}

/// Starts a route for the named custom event.
pub fn on_custom_event(event_type: impl Into<String>) -> CustomEventRouteBuilder {
    CustomEventRouteBuilder {
        event_type: event_type.into(),
    }
}

/// Starts a route for every custom event, whatever its type.
///
/// Like any route it only wins when no earlier route matched, so register it
/// after the specific custom-event routes to use it as a fallback.
pub fn on_any_custom_event() -> AnyCustomEventRouteBuilder {
    AnyCustomEventRouteBuilder
}

/// Starts a route for `asset_purchase_request_processing` events.
pub fn on_asset_purchase_request_processing() -> CustomEventRouteBuilder {
    on_custom_event(ASSET_PURCHASE_REQUEST_PROCESSING)
}
