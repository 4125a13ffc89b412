//! The request view used for route matching.
//!
//! A [`Request`] exposes exactly the discriminators the router looks at:
//!
//! - [`event_type`](Request::event_type) for every request
//! - [`status`](Request::status) and [`action_id`](Request::action_id) for
//!   product actions
//!
//! Everything else about the request is opaque to the routing layer and only
//! matters to the handlers.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::json::{DEFAULT_ACTION_POINTER, DEFAULT_REQUEST_ID_POINTER};

/// Event type of product-action invocations.
pub const PRODUCT_ACTION: &str = "product_action";

/// Event type of the asset purchase request processing custom event.
pub const ASSET_PURCHASE_REQUEST_PROCESSING: &str = "asset_purchase_request_processing";

// ============================================================================
// Event Category
// ============================================================================

/// High-level classification of an event type.
///
/// Only `product_action` is a product action; every other event type,
/// known or not, is a custom event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// Product-action invocations, keyed by status and action.
    ProductAction,
    /// Any other named event, keyed by its type only.
    CustomEvent,
}

impl EventCategory {
    /// Classifies a raw event type.
    pub fn of(event_type: &str) -> Self {
        if event_type == PRODUCT_ACTION {
            Self::ProductAction
        } else {
            Self::CustomEvent
        }
    }

    /// Returns the category name as used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductAction => "product_action",
            Self::CustomEvent => "custom_event",
        }
    }
}

/// Parsing never fails: unknown event types are custom events.
impl FromStr for EventCategory {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::of(s))
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Request Trait
// ============================================================================

/// Read-only access to the fields the router dispatches on.
///
/// Absent fields are reported as `None`; a route that filters on a field the
/// request lacks simply does not match.
pub trait Request {
    /// Returns the event type (the request's `type` field).
    fn event_type(&self) -> &str;

    /// Returns the status of the object the event refers to, if any.
    fn status(&self) -> Option<&str>;

    /// Returns the identifier of the invoked action, if any.
    fn action_id(&self) -> Option<&str>;

    /// Returns an identifier used to correlate log lines, if any.
    fn request_id(&self) -> Option<&str> {
        None
    }

    /// Returns the category of this request's event type.
    fn category(&self) -> EventCategory {
        EventCategory::of(self.event_type())
    }

    /// Returns `true` if this request is a product-action invocation.
    fn is_product_action(&self) -> bool {
        self.category() == EventCategory::ProductAction
    }
}

/// Raw JSON payloads can be dispatched directly.
///
/// Fields are read from their default locations: `type`, `status`,
/// `data.action_id` and `id`. A payload without a string `type` reports an
/// empty event type and therefore matches no route.
impl Request for Value {
    fn event_type(&self) -> &str {
        self.get("type").and_then(Value::as_str).unwrap_or_default()
    }

    fn status(&self) -> Option<&str> {
        self.get("status").and_then(Value::as_str)
    }

    fn action_id(&self) -> Option<&str> {
        self.pointer(DEFAULT_ACTION_POINTER).and_then(Value::as_str)
    }

    fn request_id(&self) -> Option<&str> {
        self.pointer(DEFAULT_REQUEST_ID_POINTER)
            .and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_of() {
        assert_eq!(EventCategory::of("product_action"), EventCategory::ProductAction);
        assert_eq!(
            EventCategory::of(ASSET_PURCHASE_REQUEST_PROCESSING),
            EventCategory::CustomEvent
        );
        assert_eq!(EventCategory::of("ping"), EventCategory::CustomEvent);
        assert_eq!("product_action".parse::<EventCategory>(), Ok(EventCategory::ProductAction));
    }

    #[test]
    fn test_category_parse_is_infallible() {
        let Ok(category) = "tier_config_setup_request".parse::<EventCategory>();
        assert_eq!(category, EventCategory::CustomEvent);
    }

    #[test]
    fn test_value_product_action_fields() {
        let request = json!({
            "id": "PA-000-001",
            "type": "product_action",
            "status": "approved",
            "data": {"action_id": "activate"},
        });

        assert_eq!(request.event_type(), PRODUCT_ACTION);
        assert_eq!(request.status(), Some("approved"));
        assert_eq!(request.action_id(), Some("activate"));
        assert_eq!(request.request_id(), Some("PA-000-001"));
        assert!(request.is_product_action());
    }

    #[test]
    fn test_value_custom_event_has_only_type() {
        let request = json!({"type": "ping"});

        assert_eq!(request.event_type(), "ping");
        assert_eq!(request.status(), None);
        assert_eq!(request.action_id(), None);
        assert_eq!(request.category(), EventCategory::CustomEvent);
    }

    #[test]
    fn test_value_without_type() {
        let request = json!({"status": "pending"});
        assert_eq!(request.event_type(), "");

        let request = json!({"type": 42});
        assert_eq!(request.event_type(), "");
    }
}
