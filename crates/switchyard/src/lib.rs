//! # Switchyard
//!
//! Route commerce platform extension requests to the handler registered for them.
//!
//! ## Overview
//!
//! An extension receives two kinds of requests from the platform:
//!
//! - **Product actions**: a user clicked an action on an object. Routed by
//!   the object's `status` and the invoked `action_id`.
//! - **Custom events**: any other named event. Routed by its `type`.
//!
//! ```text
//! ┌──────────┐     ┌─────────────┐     ┌────────┐     ┌──────────────────────────┐
//! │ Platform │────▶│  Extension  │────▶│ Router │────▶│ first matching Route     │──▶ output
//! │ (JSON)   │     │ JsonRequest │     │        │────▶│ ... or a NotFound error  │
//! └──────────┘     └─────────────┘     └────────┘     └──────────────────────────┘
//! ```
//!
//! - **Extension**: loads configuration, initializes logging, builds requests
//! - **Router**: ordered route registry; registration order is the priority
//! - **Routes**: a predicate plus a handler
//! - **Handlers**: plain functions or closures from request to output
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use switchyard::prelude::*;
//!
//! fn activate(request: &JsonRequest) -> Response {
//!     Response::ok()
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut router = Router::new();
//!     router.register_product_action_route("approved", "activate", activate)?;
//!     router.register_custom_event_route("ping", |_: &JsonRequest| Response::ok())?;
//!
//!     let extension = Extension::new(router);
//!     let response = extension.handle_str(&payload)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `toml-config`: Load `switchyard.toml` configuration files (default)
//! - `yaml-config`: Load `switchyard.yaml` configuration files
//! - `json-log`: Enable the JSON log format

pub use switchyard_core as core;
pub use switchyard_framework as framework;
pub use switchyard_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use switchyard::prelude::*;
/// ```
pub mod prelude {
    // Runtime - main entry point
    pub use switchyard_runtime::{Extension, RuntimeError, RuntimeResult, SwitchyardConfig};

    // Requests
    pub use switchyard_core::{EventCategory, JsonRequest, Request};

    // Routing
    pub use switchyard_framework::{
        DispatchError, Handler, RegistrationError, Route, Router, RouterService,
        on_any_custom_event, on_asset_purchase_request_processing, on_custom_event,
        on_product_action,
    };
}
