//! Switchyard Runtime - hosting layer for Switchyard extensions.
//!
//! This crate provides:
//! - Layered configuration (`ConfigLoader`, `SwitchyardConfig`)
//! - Logging configuration (`LoggingBuilder`, `init_from_config`)
//! - The [`Extension`] type, which turns raw JSON payloads into requests and
//!   dispatches them through a [`Router`](switchyard_framework::Router)
//!
//! ```ignore
//! use switchyard_runtime::Extension;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut router = Router::new();
//!     router.register_custom_event_route("ping", |_: &JsonRequest| "pong")?;
//!
//!     let extension = Extension::new(router);
//!     let reply = extension.handle_str(r#"{"type": "ping"}"#)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod extension;
pub mod logging;

// Re-exports
pub use config::{
    ConfigError, ConfigLoader, ConfigResult, LoggingConfig, RoutingConfig, SwitchyardConfig,
};
pub use error::{RuntimeError, RuntimeResult};
pub use extension::{Extension, ExtensionBuilder};
pub use logging::{LoggingBuilder, LoggingError, SpanEvents};

// Re-export tracing for use by other crates
pub use tracing;
pub use tracing_subscriber;

/// Prelude module for convenient imports.
///
/// This provides all the commonly used logging macros:
/// - `trace!`, `debug!`, `info!`, `warn!`, `error!`
/// - `span`, `event`
/// - `Level` for span creation
pub mod prelude {
    pub use tracing::{Level, debug, error, event, info, span, trace, warn};
}
