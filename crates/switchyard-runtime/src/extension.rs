//! Extension runtime: configuration, logging and routing in one place.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use switchyard_runtime::Extension;
//!
//! let mut router = Router::new();
//! router.register_product_action_route("approved", "activate", activate)?;
//!
//! // Auto-loads config from the current directory
//! let extension = Extension::new(router);
//! let response = extension.handle_str(payload)?;
//! ```

use serde_json::Value;
use tracing::{debug, info, info_span, warn};

use switchyard_core::{JsonRequest, Request, RequestError};
use switchyard_framework::Router;

use crate::config::{ConfigLoader, SwitchyardConfig, validate_config};
use crate::error::RuntimeResult;
use crate::logging;

/// A platform extension: a router plus the settings used to feed it.
///
/// Incoming payloads are turned into [`JsonRequest`]s using the configured
/// JSON pointers, then dispatched to the first matching route.
pub struct Extension<O> {
    config: SwitchyardConfig,
    router: Router<JsonRequest, O>,
}

impl<O> Extension<O> {
    /// Creates an extension with automatic configuration loading.
    ///
    /// Falls back to defaults when no usable configuration is found.
    pub fn new(router: Router<JsonRequest, O>) -> Self {
        let config = ConfigLoader::new()
            .with_current_dir()
            .load()
            .and_then(|config| validate_config(&config).map(|()| config))
            .unwrap_or_else(|e| {
                eprintln!("Warning: Failed to load config ({e}), using defaults");
                SwitchyardConfig::default()
            });

        Self::from_config(&config, router)
    }

    /// Creates a builder for custom configuration.
    pub fn builder(router: Router<JsonRequest, O>) -> ExtensionBuilder<O> {
        ExtensionBuilder::new(router)
    }

    /// Creates an extension from an already loaded configuration.
    ///
    /// Initializes logging; a subscriber installed earlier is left alone.
    pub fn from_config(config: &SwitchyardConfig, router: Router<JsonRequest, O>) -> Self {
        logging::init_from_config(&config.logging);

        info!(
            log_level = %config.logging.level,
            action_pointer = %config.routing.action_pointer,
            routes = router.len(),
            "Extension initialized"
        );

        Self {
            config: config.clone(),
            router,
        }
    }

    /// Handles a decoded payload.
    ///
    /// # Errors
    ///
    /// - [`RuntimeError::Request`](crate::RuntimeError::Request) if the payload
    ///   is not an object with a string `type`.
    /// - [`RuntimeError::Dispatch`](crate::RuntimeError::Dispatch) if no route
    ///   matches.
    pub fn handle(&self, body: Value) -> RuntimeResult<O> {
        let request = JsonRequest::from_value(body)?
            .with_action_pointer(self.config.routing.action_pointer.as_str())
            .with_request_id_pointer(self.config.routing.request_id_pointer.as_str());

        self.dispatch(&request)
    }

    /// Parses and handles a raw JSON payload.
    pub fn handle_str(&self, payload: &str) -> RuntimeResult<O> {
        let body: Value = serde_json::from_str(payload).map_err(RequestError::from)?;
        self.handle(body)
    }

    /// Dispatches an already built request.
    pub fn dispatch(&self, request: &JsonRequest) -> RuntimeResult<O> {
        let span = info_span!(
            "request",
            request_id = request.request_id(),
            event_type = %request.event_type(),
            category = %request.category()
        );
        let _enter = span.enter();

        match self.router.dispatch(request) {
            Ok(output) => {
                debug!("Request handled");
                Ok(output)
            }
            Err(err) => {
                warn!(error = %err, "Request not routed");
                Err(err.into())
            }
        }
    }

    /// Returns the underlying router.
    pub fn router(&self) -> &Router<JsonRequest, O> {
        &self.router
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SwitchyardConfig {
        &self.config
    }
}

/// Builder for an [`Extension`] with explicit configuration sources.
///
/// Unlike [`Extension::new`], configuration errors are reported instead of
/// replaced by defaults.
pub struct ExtensionBuilder<O> {
    config_loader: ConfigLoader,
    router: Router<JsonRequest, O>,
}

impl<O> ExtensionBuilder<O> {
    /// Creates a new builder searching the current directory.
    pub fn new(router: Router<JsonRequest, O>) -> Self {
        Self {
            config_loader: ConfigLoader::new().with_current_dir(),
            router,
        }
    }

    /// Sets a specific configuration file to load.
    pub fn config_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        self.config_loader = self.config_loader.file(path);
        self
    }

    /// Sets the configuration profile (e.g., "development", "production").
    pub fn profile(mut self, profile: impl AsRef<str>) -> Self {
        self.config_loader = self.config_loader.profile(profile);
        self
    }

    /// Adds a search path for configuration files.
    pub fn search_path<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        self.config_loader = self.config_loader.search_path(path);
        self
    }

    /// Disables loading environment variables.
    pub fn without_env(mut self) -> Self {
        self.config_loader = self.config_loader.without_env();
        self
    }

    /// Merges additional configuration programmatically.
    pub fn merge(mut self, config: SwitchyardConfig) -> Self {
        self.config_loader = self.config_loader.merge(config);
        self
    }

    /// Loads and validates the configuration, then builds the extension.
    pub fn build(self) -> RuntimeResult<Extension<O>> {
        let config = self.config_loader.load()?;
        validate_config(&config)?;
        Ok(Extension::from_config(&config, self.router))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::error::RuntimeError;
    use figment::Jail;
    use serde_json::json;
    use switchyard_framework::{DispatchError, ProductActionNotFound, on_product_action};

    fn router() -> Router<JsonRequest, String> {
        let mut router = Router::new();
        router
            .register_product_action_route("approved", "activate", |req: &JsonRequest| {
                format!("activated {}", req.request_id().unwrap_or("?"))
            })
            .unwrap();
        router
            .register_custom_event_route("ping", |_: &JsonRequest| "pong".to_string())
            .unwrap();
        router
    }

    fn extension() -> Extension<String> {
        Extension::from_config(&SwitchyardConfig::default(), router())
    }

    #[test]
    fn test_handle_product_action() {
        let extension = extension();
        let body = json!({
            "id": "PR-1",
            "type": "product_action",
            "status": "approved",
            "data": {"action_id": "activate"}
        });

        assert_eq!(extension.handle(body).unwrap(), "activated PR-1");
    }

    #[test]
    fn test_handle_str_custom_event() {
        let extension = extension();
        let out = extension.handle_str(r#"{"type": "ping"}"#).unwrap();
        assert_eq!(out, "pong");
    }

    #[test]
    fn test_product_action_not_found() {
        let extension = extension();
        let err = extension
            .handle(json!({
                "type": "product_action",
                "status": "approved",
                "data": {"action_id": "deactivate"}
            }))
            .unwrap_err();

        assert!(err.is_not_found());
        match err {
            RuntimeError::Dispatch(DispatchError::ProductActionNotFound(ProductActionNotFound {
                status,
                action,
            })) => {
                assert_eq!(status.as_deref(), Some("approved"));
                assert_eq!(action.as_deref(), Some("deactivate"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_custom_event_not_found() {
        let extension = extension();
        let err = extension.handle(json!({"type": "tier_config_setup_request"}));
        assert!(matches!(
            err,
            Err(RuntimeError::Dispatch(DispatchError::CustomEventNotFound(_)))
        ));
    }

    #[test]
    fn test_malformed_requests() {
        let extension = extension();

        assert!(matches!(
            extension.handle_str("{not json"),
            Err(RuntimeError::Request(RequestError::Parse(_)))
        ));
        assert!(matches!(
            extension.handle(json!(["ping"])),
            Err(RuntimeError::Request(RequestError::NotAnObject))
        ));
        assert!(matches!(
            extension.handle(json!({"status": "approved"})),
            Err(RuntimeError::Request(RequestError::MissingType))
        ));
    }

    #[test]
    fn test_configured_action_pointer() {
        let mut config = SwitchyardConfig::default();
        config.routing.action_pointer = "/jwt_payload/action_id".to_string();

        let mut router = Router::new();
        router
            .add(
                on_product_action()
                    .action("sync")
                    .handler(|_: &JsonRequest| "synced"),
            )
            .unwrap();
        let extension = Extension::from_config(&config, router);

        let body = json!({
            "type": "product_action",
            "status": "approved",
            "jwt_payload": {"action_id": "sync"}
        });
        assert_eq!(extension.handle(body).unwrap(), "synced");
        assert_eq!(extension.config().routing.action_pointer, "/jwt_payload/action_id");
        assert_eq!(extension.router().len(), 1);
    }

    #[test]
    fn test_builder_reads_env() {
        Jail::expect_with(|jail| {
            jail.set_env("SWITCHYARD_ROUTING__ACTION_POINTER", "/body/action");

            let extension = Extension::builder(router())
                .search_path(".")
                .build()
                .map_err(|e| e.to_string())?;

            assert_eq!(extension.config().routing.action_pointer, "/body/action");
            let out = extension
                .handle(json!({
                    "type": "product_action",
                    "status": "approved",
                    "body": {"action": "activate"}
                }))
                .map_err(|e| e.to_string())?;
            assert_eq!(out, "activated ?");
            Ok(())
        });
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        Jail::expect_with(|jail| {
            jail.set_env("SWITCHYARD_ROUTING__ACTION_POINTER", "action_id");

            let result = Extension::builder(router()).search_path(".").build();
            assert!(matches!(
                result,
                Err(RuntimeError::Config(ConfigError::InvalidPointer { .. }))
            ));
            Ok(())
        });
    }
}
