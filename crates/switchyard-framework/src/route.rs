//! Route descriptors for the Switchyard framework.
//!
//! A [`Route`] binds a matching rule to a [`Handler`](crate::Handler). Routes
//! come in two shapes, one per event category, so the filters that apply to a
//! route are visible in its type:
//!
//! - [`CustomEventRoute`] matches on the event type alone.
//! - [`ProductActionRoute`] matches `product_action` requests, optionally
//!   narrowed by object status and by action identifier.
//! - [`AnyCustomEventRoute`] matches every custom event, whatever its type.
//!   Registered last, it answers custom events no other route claims.
//!
//! Routes are immutable once built. Matching is a pure predicate.

use std::fmt;

use switchyard_core::{EventCategory, PRODUCT_ACTION, Request};

use crate::error::{RegistrationError, RegistrationResult};
use crate::handler::BoxedHandler;

// ============================================================================
// Custom Event Route
// ============================================================================

/// A route keyed solely by event type.
pub struct CustomEventRoute<R, O> {
    event_type: String,
    handler: BoxedHandler<R, O>,
}

impl<R, O> CustomEventRoute<R, O> {
    /// Creates a route for the given event type.
    pub fn new(event_type: impl Into<String>, handler: BoxedHandler<R, O>) -> Self {
        Self {
            event_type: event_type.into(),
            handler,
        }
    }

    /// Returns the event type this route answers to.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Returns `true` if the request has this route's event type.
    pub fn matches(&self, request: &R) -> bool
    where
        R: Request,
    {
        request.event_type() == self.event_type
    }
}

impl<R, O> Clone for CustomEventRoute<R, O> {
    fn clone(&self) -> Self {
        Self {
            event_type: self.event_type.clone(),
            handler: self.handler.clone(),
        }
    }
}

// ============================================================================
// Any Custom Event Route
// ============================================================================

/// A route matching every event type except `product_action`.
pub struct AnyCustomEventRoute<R, O> {
    handler: BoxedHandler<R, O>,
}

impl<R, O> AnyCustomEventRoute<R, O> {
    /// Creates a catch-all custom-event route.
    pub fn new(handler: BoxedHandler<R, O>) -> Self {
        Self { handler }
    }

    /// Returns `true` if the request is a custom event.
    pub fn matches(&self, request: &R) -> bool
    where
        R: Request,
    {
        request.category() == EventCategory::CustomEvent
    }
}

impl<R, O> Clone for AnyCustomEventRoute<R, O> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
        }
    }
}

// ============================================================================
// Product Action Route
// ============================================================================

/// A route for `product_action` requests.
///
/// Both filters are optional. An absent filter matches any request, including
/// one that lacks the corresponding field; a present filter only matches a
/// request carrying exactly that value.
pub struct ProductActionRoute<R, O> {
    status: Option<String>,
    action: Option<String>,
    handler: BoxedHandler<R, O>,
}

impl<R, O> ProductActionRoute<R, O> {
    /// Creates a product-action route with the given filters.
    pub fn new(
        status: Option<String>,
        action: Option<String>,
        handler: BoxedHandler<R, O>,
    ) -> Self {
        Self {
            status,
            action,
            handler,
        }
    }

    /// Returns the status filter, if set.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the action filter, if set.
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Returns `true` if the request is a product action passing both filters.
    pub fn matches(&self, request: &R) -> bool
    where
        R: Request,
    {
        if request.event_type() != PRODUCT_ACTION {
            return false;
        }

        if let Some(status) = &self.status
            && request.status() != Some(status.as_str())
        {
            return false;
        }

        if let Some(action) = &self.action
            && request.action_id() != Some(action.as_str())
        {
            return false;
        }

        true
    }
}

impl<R, O> Clone for ProductActionRoute<R, O> {
    fn clone(&self) -> Self {
        Self {
            status: self.status.clone(),
            action: self.action.clone(),
            handler: self.handler.clone(),
        }
    }
}

// ============================================================================
// Route
// ============================================================================

/// A single dispatch rule and its handler.
pub enum Route<R, O> {
    /// Matches on event type only.
    CustomEvent(CustomEventRoute<R, O>),
    /// Matches `product_action` requests by status and action.
    ProductAction(ProductActionRoute<R, O>),
    /// Matches any custom event.
    AnyCustomEvent(AnyCustomEventRoute<R, O>),
}

/// Event type shown for the catch-all custom-event route.
const ANY_CUSTOM_EVENT: &str = "*";

impl<R, O> Route<R, O> {
    /// Returns the event type this route answers to, `*` for the
    /// catch-all custom-event route.
    pub fn event_type(&self) -> &str {
        match self {
            Self::CustomEvent(route) => route.event_type(),
            Self::ProductAction(_) => PRODUCT_ACTION,
            Self::AnyCustomEvent(_) => ANY_CUSTOM_EVENT,
        }
    }

    /// Returns the status filter. Always `None` for custom-event routes.
    pub fn status(&self) -> Option<&str> {
        match self {
            Self::CustomEvent(_) | Self::AnyCustomEvent(_) => None,
            Self::ProductAction(route) => route.status(),
        }
    }

    /// Returns the action filter. Always `None` for custom-event routes.
    pub fn action(&self) -> Option<&str> {
        match self {
            Self::CustomEvent(_) | Self::AnyCustomEvent(_) => None,
            Self::ProductAction(route) => route.action(),
        }
    }

    /// Returns the handler bound to this route.
    pub fn handler(&self) -> &BoxedHandler<R, O> {
        match self {
            Self::CustomEvent(route) => &route.handler,
            Self::ProductAction(route) => &route.handler,
            Self::AnyCustomEvent(route) => &route.handler,
        }
    }

    /// Returns `true` if this route matches the request.
    pub fn matches(&self, request: &R) -> bool
    where
        R: Request,
    {
        match self {
            Self::CustomEvent(route) => route.matches(request),
            Self::ProductAction(route) => route.matches(request),
            Self::AnyCustomEvent(route) => route.matches(request),
        }
    }

    /// Invokes the handler with the request.
    pub fn call(&self, request: &R) -> O {
        self.handler().call(request)
    }

    /// Returns `true` if both routes are of the same kind with the same
    /// event type and filters.
    ///
    /// Handlers are not compared.
    pub fn same_predicate(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::CustomEvent(a), Self::CustomEvent(b)) => a.event_type == b.event_type,
            (Self::ProductAction(a), Self::ProductAction(b)) => {
                a.status == b.status && a.action == b.action
            }
            (Self::AnyCustomEvent(_), Self::AnyCustomEvent(_)) => true,
            _ => false,
        }
    }

    /// Checks the discriminators of this route.
    pub fn validate(&self) -> RegistrationResult<()> {
        match self {
            Self::CustomEvent(route) => {
                if route.event_type.is_empty() {
                    return Err(RegistrationError::EmptyEventType);
                }
                check_name("event type", &route.event_type)
            }
            Self::ProductAction(route) => {
                if let Some(status) = &route.status {
                    if status.is_empty() {
                        return Err(RegistrationError::EmptyStatus);
                    }
                    check_name("status", status)?;
                }
                if let Some(action) = &route.action {
                    if action.is_empty() {
                        return Err(RegistrationError::EmptyAction);
                    }
                    check_name("action", action)?;
                }
                Ok(())
            }
            Self::AnyCustomEvent(_) => Ok(()),
        }
    }
}

fn check_name(field: &'static str, value: &str) -> RegistrationResult<()> {
    if value.chars().any(char::is_whitespace) {
        return Err(RegistrationError::InvalidName {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

impl<R, O> From<CustomEventRoute<R, O>> for Route<R, O> {
    fn from(route: CustomEventRoute<R, O>) -> Self {
        Self::CustomEvent(route)
    }
}

impl<R, O> From<ProductActionRoute<R, O>> for Route<R, O> {
    fn from(route: ProductActionRoute<R, O>) -> Self {
        Self::ProductAction(route)
    }
}

impl<R, O> From<AnyCustomEventRoute<R, O>> for Route<R, O> {
    fn from(route: AnyCustomEventRoute<R, O>) -> Self {
        Self::AnyCustomEvent(route)
    }
}

impl<R, O> Clone for Route<R, O> {
    fn clone(&self) -> Self {
        match self {
            Self::CustomEvent(route) => Self::CustomEvent(route.clone()),
            Self::ProductAction(route) => Self::ProductAction(route.clone()),
            Self::AnyCustomEvent(route) => Self::AnyCustomEvent(route.clone()),
        }
    }
}

impl<R, O> fmt::Display for Route<R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CustomEvent(route) => f.write_str(route.event_type()),
            Self::ProductAction(route) => write!(
                f,
                "{PRODUCT_ACTION}[status={}, action={}]",
                route.status().unwrap_or("*"),
                route.action().unwrap_or("*")
            ),
            Self::AnyCustomEvent(_) => f.write_str("custom_event[type=*]"),
        }
    }
}

impl<R, O> fmt::Debug for Route<R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("event_type", &self.event_type())
            .field("status", &self.status())
            .field("action", &self.action())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::into_handler;
    use serde_json::{Value, json};

    fn noop() -> BoxedHandler<Value, ()> {
        into_handler(|_: &Value| ())
    }

    fn product_action(status: Option<&str>, action: Option<&str>) -> Route<Value, ()> {
        ProductActionRoute::new(
            status.map(str::to_string),
            action.map(str::to_string),
            noop(),
        )
        .into()
    }

    #[test]
    fn test_custom_event_matches_on_type_only() {
        let route: Route<Value, ()> = CustomEventRoute::new("ping", noop()).into();

        assert!(route.matches(&json!({"type": "ping"})));
        assert!(route.matches(&json!({"type": "ping", "status": "approved"})));
        assert!(!route.matches(&json!({"type": "pong"})));
        assert!(!route.matches(&json!({})));
    }

    #[test]
    fn test_product_action_requires_both_filters() {
        let route = product_action(Some("approved"), Some("activate"));

        let request = json!({
            "type": "product_action",
            "status": "approved",
            "data": {"action_id": "activate"},
        });
        assert!(route.matches(&request));

        let wrong_status = json!({
            "type": "product_action",
            "status": "pending",
            "data": {"action_id": "activate"},
        });
        assert!(!route.matches(&wrong_status));

        let wrong_action = json!({
            "type": "product_action",
            "status": "approved",
            "data": {"action_id": "suspend"},
        });
        assert!(!route.matches(&wrong_action));
    }

    #[test]
    fn test_product_action_ignores_other_event_types() {
        let route = product_action(Some("approved"), Some("activate"));

        let request = json!({
            "type": "asset_purchase_request_processing",
            "status": "approved",
            "data": {"action_id": "activate"},
        });
        assert!(!route.matches(&request));
    }

    #[test]
    fn test_missing_request_fields_do_not_match_filters() {
        let route = product_action(Some("approved"), Some("activate"));

        assert!(!route.matches(&json!({"type": "product_action"})));
        assert!(!route.matches(&json!({
            "type": "product_action",
            "status": "approved",
        })));
    }

    #[test]
    fn test_partial_filters_degrade_gracefully() {
        let by_status = product_action(Some("approved"), None);
        let by_action = product_action(None, Some("activate"));
        let any = product_action(None, None);

        let request = json!({"type": "product_action", "status": "approved"});
        assert!(by_status.matches(&request));
        assert!(!by_action.matches(&request));
        assert!(any.matches(&request));

        let request = json!({"type": "product_action", "data": {"action_id": "activate"}});
        assert!(!by_status.matches(&request));
        assert!(by_action.matches(&request));
        assert!(any.matches(&request));
    }

    #[test]
    fn test_validate() {
        assert!(product_action(Some("approved"), Some("activate")).validate().is_ok());
        assert!(product_action(None, None).validate().is_ok());
        assert_eq!(
            product_action(Some(""), Some("activate")).validate(),
            Err(RegistrationError::EmptyStatus)
        );
        assert_eq!(
            product_action(Some("approved"), Some("")).validate(),
            Err(RegistrationError::EmptyAction)
        );
        assert!(matches!(
            product_action(Some("approved"), Some("do it")).validate(),
            Err(RegistrationError::InvalidName { field: "action", .. })
        ));

        let route: Route<Value, ()> = CustomEventRoute::new("", noop()).into();
        assert_eq!(route.validate(), Err(RegistrationError::EmptyEventType));
    }

    #[test]
    fn test_same_predicate_ignores_handler() {
        let a = product_action(Some("approved"), Some("activate"));
        let b = product_action(Some("approved"), Some("activate"));
        let c = product_action(Some("approved"), None);

        assert!(a.same_predicate(&b));
        assert!(!a.same_predicate(&c));
    }

    #[test]
    fn test_display() {
        let route = product_action(Some("approved"), None);
        assert_eq!(route.to_string(), "product_action[status=approved, action=*]");

        let route: Route<Value, ()> = CustomEventRoute::new("ping", noop()).into();
        assert_eq!(route.to_string(), "ping");

        let route: Route<Value, ()> = AnyCustomEventRoute::new(noop()).into();
        assert_eq!(route.to_string(), "custom_event[type=*]");
    }

    #[test]
    fn test_any_custom_event_matches_every_custom_event() {
        let route: Route<Value, ()> = AnyCustomEventRoute::new(noop()).into();

        assert!(route.matches(&json!({"type": "say_hello"})));
        assert!(route.matches(&json!({"type": "asset_purchase_request_processing"})));
        assert!(!route.matches(&json!({
            "type": "product_action",
            "status": "approved",
            "data": {"action_id": "activate"},
        })));
        assert_eq!(route.validate(), Ok(()));
        assert_eq!(route.status(), None);
    }

    #[test]
    fn test_any_custom_event_is_not_a_literal_star() {
        let any: Route<Value, ()> = AnyCustomEventRoute::new(noop()).into();
        let star: Route<Value, ()> = CustomEventRoute::new("*", noop()).into();
        let other: Route<Value, ()> = AnyCustomEventRoute::new(noop()).into();

        assert!(!any.same_predicate(&star));
        assert!(any.same_predicate(&other));
        assert!(!star.matches(&json!({"type": "say_hello"})));
    }
}
