//! JSON-backed request implementation.
//!
//! [`JsonRequest`] wraps the raw payload delivered by the platform and reads
//! the dispatch discriminators out of it. The event type and the status live
//! at fixed top-level keys; the action identifier and the request id are
//! nested and addressed through JSON pointers (RFC 6901) so that extensions
//! receiving a differently shaped payload can relocate them.

use std::str::FromStr;

use serde_json::Value;

use crate::error::{RequestError, RequestResult};
use crate::request::Request;

/// Default location of the invoked action identifier.
pub const DEFAULT_ACTION_POINTER: &str = "/data/action_id";

/// Default location of the request identifier.
pub const DEFAULT_REQUEST_ID_POINTER: &str = "/id";

/// A request backed by a JSON object.
///
/// Construction guarantees the payload is an object with a string `type`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRequest {
    body: Value,
    action_pointer: String,
    request_id_pointer: String,
}

impl JsonRequest {
    /// Wraps a JSON value, checking that it is an object with a string `type`.
    pub fn from_value(body: Value) -> RequestResult<Self> {
        match body.as_object() {
            None => return Err(RequestError::NotAnObject),
            Some(object) if !object.get("type").is_some_and(Value::is_string) => {
                return Err(RequestError::MissingType);
            }
            Some(_) => {}
        }

        Ok(Self {
            body,
            action_pointer: DEFAULT_ACTION_POINTER.to_string(),
            request_id_pointer: DEFAULT_REQUEST_ID_POINTER.to_string(),
        })
    }

    /// Overrides where the action identifier is read from.
    pub fn with_action_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.action_pointer = pointer.into();
        self
    }

    /// Overrides where the request identifier is read from.
    pub fn with_request_id_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.request_id_pointer = pointer.into();
        self
    }

    /// Looks up a string field by JSON pointer.
    pub fn field(&self, pointer: &str) -> Option<&str> {
        self.body.pointer(pointer).and_then(Value::as_str)
    }

    /// Returns the raw payload.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Consumes the request and returns the raw payload.
    pub fn into_inner(self) -> Value {
        self.body
    }
}

impl TryFrom<Value> for JsonRequest {
    type Error = RequestError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl FromStr for JsonRequest {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(value)
    }
}

impl Request for JsonRequest {
    fn event_type(&self) -> &str {
        self.field("/type").unwrap_or_default()
    }

    fn status(&self) -> Option<&str> {
        self.field("/status")
    }

    fn action_id(&self) -> Option<&str> {
        self.field(&self.action_pointer)
    }

    fn request_id(&self) -> Option<&str> {
        self.field(&self.request_id_pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_product_action() {
        let request: JsonRequest = r#"{
            "id": "PA-123",
            "type": "product_action",
            "status": "pending",
            "data": {"action_id": "sso"}
        }"#
        .parse()
        .unwrap();

        assert!(request.is_product_action());
        assert_eq!(request.status(), Some("pending"));
        assert_eq!(request.action_id(), Some("sso"));
        assert_eq!(request.request_id(), Some("PA-123"));
    }

    #[test]
    fn test_custom_pointers() {
        let request = JsonRequest::from_value(json!({
            "type": "product_action",
            "jwt_payload": {"action_id": "sso"},
            "meta": {"trace": "t-1"},
        }))
        .unwrap()
        .with_action_pointer("/jwt_payload/action_id")
        .with_request_id_pointer("/meta/trace");

        assert_eq!(request.action_id(), Some("sso"));
        assert_eq!(request.request_id(), Some("t-1"));
    }

    #[test]
    fn test_rejects_malformed_payloads() {
        assert!(matches!(
            "not json".parse::<JsonRequest>(),
            Err(RequestError::Parse(_))
        ));
        assert_eq!(
            JsonRequest::from_value(json!(["product_action"])),
            Err(RequestError::NotAnObject)
        );
        assert_eq!(
            JsonRequest::from_value(json!({"status": "approved"})),
            Err(RequestError::MissingType)
        );
        assert_eq!(
            JsonRequest::from_value(json!({"type": null})),
            Err(RequestError::MissingType)
        );
    }

    #[test]
    fn test_non_string_fields_are_absent() {
        let request = JsonRequest::from_value(json!({
            "type": "product_action",
            "status": 3,
            "data": {"action_id": {"nested": true}},
        }))
        .unwrap();

        assert_eq!(request.status(), None);
        assert_eq!(request.action_id(), None);
        assert_eq!(request.request_id(), None);
    }

    #[test]
    fn test_into_inner_returns_payload() {
        let body = json!({"type": "ping", "extra": 1});
        let request = JsonRequest::try_from(body.clone()).unwrap();

        assert_eq!(request.body()["extra"], 1);
        assert_eq!(request.into_inner(), body);
    }
}
