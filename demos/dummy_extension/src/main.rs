//! Dummy Extension Example
//!
//! A minimal extension wired through the Switchyard router. It reads one
//! platform request as JSON and prints the response the extension would send.
//!
//! # Routes
//!
//! ```text
//! product_action  status=approved  action=activate  -> activate
//! product_action  status=approved  action=*         -> unsupported_action
//! ping                                              -> ping
//! asset_purchase_request_processing                 -> approve_purchase
//! ```
//!
//! Unmatched requests are answered with a 404, handler failures with a 500.
//!
//! # Usage
//!
//! ```bash
//! echo '{"type": "ping"}' | cargo run --package dummy-extension
//! cargo run --package dummy-extension -- --request request.json
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use switchyard::prelude::*;
use switchyard::runtime::config::{ConfigLoader, LogOutput, validate_config};
use tracing::{info, warn};

// ============================================================================
// Responses
// ============================================================================

/// What the extension answers with.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct Response {
    http_status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<serde_json::Value>,
}

impl Response {
    fn ok(body: serde_json::Value) -> Self {
        Self {
            http_status: 200,
            body: Some(body),
        }
    }

    fn status(http_status: u16) -> Self {
        Self {
            http_status,
            body: None,
        }
    }
}

type Outcome = Result<Response>;

// ============================================================================
// Handler Functions
// ============================================================================

fn activate(request: &JsonRequest) -> Outcome {
    let subscription = request
        .field("/data/subscription_id")
        .context("activate requires data.subscription_id")?;
    info!(subscription, "Activating subscription");
    Ok(Response::ok(serde_json::json!({ "activated": subscription })))
}

fn unsupported_action(request: &JsonRequest) -> Outcome {
    bail!(
        "action '{}' is not supported yet",
        request.action_id().unwrap_or_default()
    )
}

fn ping(_: &JsonRequest) -> Outcome {
    Ok(Response::ok(serde_json::json!("pong")))
}

fn approve_purchase(request: &JsonRequest) -> Outcome {
    info!(request_id = request.request_id(), "Approving purchase request");
    Ok(Response::status(202))
}

fn router() -> Result<Router<JsonRequest, Outcome>> {
    let mut router = Router::new();
    router.register_product_action_route("approved", "activate", activate)?;
    router.add(on_product_action().status("approved").handler(unsupported_action))?;
    router.register_custom_event_route("ping", ping)?;
    router.add(on_asset_purchase_request_processing().handler(approve_purchase))?;
    Ok(router)
}

/// Maps the routing result onto the response sent back to the platform.
fn respond(result: RuntimeResult<Outcome>) -> Response {
    match result {
        Ok(Ok(response)) => response,
        Ok(Err(err)) => {
            warn!(error = %err, "Handler failed");
            Response::status(500)
        }
        Err(err) if err.is_not_found() => {
            warn!(error = %err, "No handler for request");
            Response::status(404)
        }
        Err(err) => {
            warn!(error = %err, "Rejected request");
            Response::status(400)
        }
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// Loads the extension configuration, keeping stdout for the response.
fn config() -> Result<SwitchyardConfig> {
    let mut config = ConfigLoader::new().with_current_dir().load()?;
    config.logging.output = LogOutput::Stderr;
    validate_config(&config)?;
    Ok(config)
}

#[derive(Debug, Parser)]
#[command(about = "Route a single platform request through the dummy extension")]
struct Args {
    /// Read the request from this file instead of stdin.
    #[arg(short, long)]
    request: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let payload = match &args.request {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let extension = Extension::from_config(&config()?, router()?);
    let response = respond(extension.handle_str(&payload));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extension() -> Extension<Outcome> {
        Extension::from_config(&SwitchyardConfig::default(), router().unwrap())
    }

    fn handle(body: serde_json::Value) -> Response {
        respond(extension().handle(body))
    }

    #[test]
    fn activates_subscription() {
        let response = handle(json!({
            "type": "product_action",
            "status": "approved",
            "data": {"action_id": "activate", "subscription_id": "AS-1"}
        }));
        assert_eq!(response, Response::ok(json!({"activated": "AS-1"})));
    }

    #[test]
    fn other_approved_actions_fail_in_handler() {
        let response = handle(json!({
            "type": "product_action",
            "status": "approved",
            "data": {"action_id": "suspend"}
        }));
        assert_eq!(response.http_status, 500);
    }

    #[test]
    fn unknown_status_is_not_found() {
        let response = handle(json!({
            "type": "product_action",
            "status": "draft",
            "data": {"action_id": "activate"}
        }));
        assert_eq!(response.http_status, 404);
    }

    #[test]
    fn custom_events() {
        assert_eq!(handle(json!({"type": "ping"})).http_status, 200);
        assert_eq!(
            handle(json!({"type": "asset_purchase_request_processing", "id": "PR-1"})).http_status,
            202
        );
        assert_eq!(handle(json!({"type": "pong"})).http_status, 404);
    }

    #[test]
    fn logs_never_share_stdout_with_the_response() {
        assert_eq!(config().unwrap().logging.output, LogOutput::Stderr);
    }

    #[test]
    fn malformed_request_is_rejected() {
        assert_eq!(respond(extension().handle_str("[]")).http_status, 400);
    }
}
