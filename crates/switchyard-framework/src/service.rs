//! Tower service adapter for the [`Router`].
//!
//! [`RouterService`] lets a built router sit behind ordinary tower middleware.
//! Dispatch is synchronous, so the returned future is always ready and the
//! service never applies backpressure.
//!
//! ```rust,ignore
//! use tower::{ServiceBuilder, ServiceExt};
//!
//! let service = ServiceBuilder::new()
//!     .map_request(normalize)
//!     .service(RouterService::new(router));
//!
//! let output = service.oneshot(request).await?;
//! ```

use std::sync::Arc;
use std::task::{Context, Poll};

use futures::future::{Ready, ready};
use tower::Service;

use switchyard_core::Request;

use crate::error::DispatchError;
use crate::router::Router;

/// A cheaply clonable `tower::Service` wrapping a shared [`Router`].
pub struct RouterService<R, O> {
    router: Arc<Router<R, O>>,
}

impl<R, O> RouterService<R, O> {
    /// Wraps a router.
    pub fn new(router: Router<R, O>) -> Self {
        Self {
            router: Arc::new(router),
        }
    }

    /// Wraps an already shared router.
    pub fn from_shared(router: Arc<Router<R, O>>) -> Self {
        Self { router }
    }

    /// Returns the wrapped router.
    pub fn router(&self) -> &Router<R, O> {
        &self.router
    }
}

impl<R, O> Clone for RouterService<R, O> {
    fn clone(&self) -> Self {
        Self {
            router: Arc::clone(&self.router),
        }
    }
}

impl<R, O> From<Router<R, O>> for RouterService<R, O> {
    fn from(router: Router<R, O>) -> Self {
        Self::new(router)
    }
}

impl<R, O> Service<R> for RouterService<R, O>
where
    R: Request,
{
    type Response = O;
    type Error = DispatchError;
    type Future = Ready<Result<O, DispatchError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: R) -> Self::Future {
        ready(self.router.dispatch(&request))
    }
}
