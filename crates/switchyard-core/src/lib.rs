//! # Switchyard Core
//!
//! The request layer of the Switchyard dispatch toolkit.
//!
//! Extensions receive two kinds of events from the commerce platform:
//!
//! - **Product actions**: a user pressed an action button on a product object.
//!   The request carries the object's `status` and the invoked `action_id`.
//! - **Custom events**: any other named business event, identified only by
//!   its `type` (for example `asset_purchase_request_processing`).
//!
//! This crate does not route anything itself. It defines the [`Request`] view
//! the router reads discriminators through, plus a JSON-backed implementation.
//!
//! ```rust,ignore
//! use switchyard_core::{JsonRequest, Request};
//!
//! let request: JsonRequest = r#"{"type": "product_action", "status": "approved",
//!     "data": {"action_id": "activate"}}"#.parse()?;
//!
//! assert!(request.is_product_action());
//! assert_eq!(request.action_id(), Some("activate"));
//! ```

pub mod error;
pub mod json;
pub mod request;

pub use error::{RequestError, RequestResult};
pub use json::{DEFAULT_ACTION_POINTER, DEFAULT_REQUEST_ID_POINTER, JsonRequest};
pub use request::{ASSET_PURCHASE_REQUEST_PROCESSING, EventCategory, PRODUCT_ACTION, Request};
