//! Handler system for the Switchyard framework.
//!
//! A [`Handler`] is the unary callable bound to a route. It receives the
//! matched request by reference and returns an application-defined output.
//! Any `Fn(&R) -> O` closure or function is a handler through the blanket
//! implementation, so registration reads naturally:
//!
//! ```rust,ignore
//! fn activate(request: &JsonRequest) -> Result<Response, AppError> {
//!     // ...
//! }
//!
//! router.register_product_action_route("approved", "activate", activate)?;
//! router.register_custom_event_route("ping", |_: &JsonRequest| Ok(Response::text("pong")))?;
//! ```
//!
//! The router never inspects the output. A fallible handler simply returns a
//! `Result` and the caller receives it exactly as produced.

use std::sync::Arc;

/// The callable bound to a route.
pub trait Handler<R: ?Sized, O>: Send + Sync {
    /// Handles the matched request.
    fn call(&self, request: &R) -> O;
}

impl<F, R, O> Handler<R, O> for F
where
    F: Fn(&R) -> O + Send + Sync,
    R: ?Sized,
{
    fn call(&self, request: &R) -> O {
        self(request)
    }
}

/// A type-erased handler that can be stored in a route table.
pub type BoxedHandler<R, O> = Arc<dyn Handler<R, O>>;

/// Converts a handler into a [`BoxedHandler`].
pub fn into_handler<R, O, H>(handler: H) -> BoxedHandler<R, O>
where
    R: ?Sized,
    H: Handler<R, O> + 'static,
{
    Arc::new(handler)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Handler<str, String> for Upper {
        fn call(&self, request: &str) -> String {
            request.to_uppercase()
        }
    }

    fn length(request: &str) -> usize {
        request.len()
    }

    #[test]
    fn test_closure_is_handler() {
        let prefix = String::from("got ");
        let handler: BoxedHandler<str, String> =
            into_handler(move |request: &str| format!("{prefix}{request}"));
        assert_eq!(handler.call("ping"), "got ping");
    }

    #[test]
    fn test_fn_item_is_handler() {
        let handler: BoxedHandler<str, usize> = into_handler(length);
        assert_eq!(handler.call("abcd"), 4);
    }

    #[test]
    fn test_struct_handler() {
        let handler: BoxedHandler<str, String> = into_handler(Upper);
        assert_eq!(handler.call("pong"), "PONG");
    }
}
