//! Request router for the Switchyard framework.
//!
//! The [`Router`] owns an ordered list of [`Route`]s. Dispatching a request:
//!
//! 1. Routes are checked in registration order
//! 2. The first route whose predicate matches is invoked with the request
//! 3. The handler's output is returned as-is
//! 4. If nothing matches, a category-specific not-found error is returned
//!
//! Registration order is the only priority. Overlapping routes are legal and
//! the earliest registration wins, so a catch-all route belongs at the end:
//!
//! ```rust,ignore
//! use switchyard_framework::{Router, on_product_action};
//!
//! let mut router = Router::new();
//!
//! // Specific route first
//! router.register_product_action_route("approved", "activate", activate)?;
//!
//! // Fallback for any other product action
//! router.add(on_product_action().handler(unsupported_action))?;
//! ```

use std::fmt;
use std::slice;

use tracing::{Level, debug, span, trace, warn};

use switchyard_core::{EventCategory, Request};

use crate::error::{
    CustomEventNotFound, DispatchError, DispatchResult, ProductActionNotFound, RegistrationResult,
};
use crate::handler::Handler;
use crate::route::Route;
use crate::route_builders::{on_custom_event, on_product_action};

/// An ordered registry of routes with a single dispatch entry point.
///
/// # Thread Safety
///
/// Registration needs `&mut self` and dispatch only `&self`, so once the
/// router is built it can be shared (for example in an `Arc`) and dispatched
/// from many threads at once.
pub struct Router<R, O> {
    routes: Vec<Route<R, O>>,
}

impl<R, O> Default for Router<R, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, O> Router<R, O> {
    /// Creates a new, empty router.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a route.
    ///
    /// The route is validated first; on error the router is left unchanged.
    /// Registering a route with the same predicate as an earlier one is
    /// allowed but logged, since the later route can never be selected.
    pub fn add(&mut self, route: Route<R, O>) -> RegistrationResult<()> {
        route.validate()?;

        if let Some(position) = self.routes.iter().position(|r| r.same_predicate(&route)) {
            warn!(
                route = %route,
                shadowed_by = position,
                "Route duplicates an earlier registration and will never be selected"
            );
        }

        debug!(route = %route, position = self.routes.len(), "Registered route");
        self.routes.push(route);
        Ok(())
    }

    /// Appends a route (builder pattern).
    pub fn with_route(mut self, route: Route<R, O>) -> RegistrationResult<Self> {
        self.add(route)?;
        Ok(self)
    }

    /// Registers a handler for product actions with the given object status
    /// and action identifier.
    pub fn register_product_action_route<H>(
        &mut self,
        status: impl Into<String>,
        action: impl Into<String>,
        handler: H,
    ) -> RegistrationResult<()>
    where
        H: Handler<R, O> + 'static,
    {
        self.add(
            on_product_action()
                .status(status)
                .action(action)
                .handler(handler),
        )
    }

    /// Registers a handler for the named custom event.
    pub fn register_custom_event_route<H>(
        &mut self,
        event_type: impl Into<String>,
        handler: H,
    ) -> RegistrationResult<()>
    where
        H: Handler<R, O> + 'static,
    {
        self.add(on_custom_event(event_type).handler(handler))
    }

    /// Returns the number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no route has been registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterates over the routes in match-priority order.
    pub fn routes(&self) -> slice::Iter<'_, Route<R, O>> {
        self.routes.iter()
    }
}

impl<R, O> Router<R, O>
where
    R: Request,
{
    /// Finds the route that would handle the request, without invoking it.
    pub fn resolve(&self, request: &R) -> DispatchResult<&Route<R, O>> {
        for (position, route) in self.routes.iter().enumerate() {
            if route.matches(request) {
                debug!(route = %route, position, "Route matched");
                return Ok(route);
            }
            trace!(route = %route, position, "Route skipped");
        }

        Err(Self::not_found(request))
    }

    /// Dispatches the request to the first matching route.
    ///
    /// Returns the handler's output unchanged. The router never inspects it,
    /// so a handler failure carried in the output reaches the caller as-is.
    ///
    /// # Errors
    ///
    /// - [`ProductActionNotFound`] if the request is a product action and no
    ///   route matches its status and action.
    /// - [`CustomEventNotFound`] for any other unmatched event type.
    pub fn dispatch(&self, request: &R) -> DispatchResult<O> {
        let span = span!(
            Level::DEBUG,
            "dispatch",
            event_type = %request.event_type(),
            request_id = request.request_id()
        );
        let _enter = span.enter();

        let route = self.resolve(request)?;
        Ok(route.call(request))
    }

    fn not_found(request: &R) -> DispatchError {
        let err = match request.category() {
            EventCategory::ProductAction => DispatchError::from(ProductActionNotFound {
                status: request.status().map(str::to_string),
                action: request.action_id().map(str::to_string),
            }),
            EventCategory::CustomEvent => DispatchError::from(CustomEventNotFound {
                event_type: request.event_type().to_string(),
            }),
        };
        debug!(error = %err, "No route matched");
        err
    }
}

impl<R, O> Clone for Router<R, O> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
        }
    }
}

impl<R, O> fmt::Debug for Router<R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("route_count", &self.routes.len())
            .field("routes", &self.routes)
            .finish()
    }
}
