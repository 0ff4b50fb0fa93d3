//! Handler and middleware abstractions for the request pipeline.
//!
//! A pipeline is a [`MiddlewareChain`]: an ordered list of
//! [`Middleware`] wrapped around a terminal [`Handler`]. Each middleware
//! receives the request and an `Arc<dyn Handler>` representing the rest
//! of the chain, and decides what to pass on.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::trace;

use crate::exception::Result;

use super::{Request, Response};

/// Processes a request into a response.
///
/// All terminal request handlers implement this.
#[async_trait]
pub trait Handler: Send + Sync {
	async fn handle(&self, request: Request) -> Result<Response>;
}

#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
	async fn handle(&self, request: Request) -> Result<Response> {
		(**self).handle(request).await
	}
}

/// A single stage of the request pipeline.
///
/// Implementations receive the request and the rest of the chain as
/// `next`, and must eventually return a response — either their own or
/// the one produced by `next`.
#[async_trait]
pub trait Middleware: Send + Sync {
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response>;

	/// Whether this middleware should run for the given request.
	///
	/// Returning false skips the middleware entirely; the chain calls
	/// the next stage directly. Defaults to true.
	fn should_continue(&self, _request: &Request) -> bool {
		true
	}
}

/// An ordered middleware pipeline around a terminal handler.
///
/// Middleware run in registration order: the first one added is the
/// outermost and sees the request first.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use async_trait::async_trait;
/// use basic_authentication::{Handler, MiddlewareChain, Request, Response, Result};
///
/// struct Hello;
///
/// #[async_trait]
/// impl Handler for Hello {
///     async fn handle(&self, _request: Request) -> Result<Response> {
///         Ok(Response::ok().with_body("hello".to_string()))
///     }
/// }
///
/// # async fn example() {
/// let chain = MiddlewareChain::new(Arc::new(Hello));
/// let request = Request::builder().build().unwrap();
/// let response = chain.handle(request).await.unwrap();
/// assert_eq!(response.body_text(), "hello");
/// # }
/// # tokio::runtime::Runtime::new().unwrap().block_on(example());
/// ```
pub struct MiddlewareChain {
	middlewares: Vec<Arc<dyn Middleware>>,
	handler: Arc<dyn Handler>,
}

impl MiddlewareChain {
	/// Creates an empty chain around the given terminal handler.
	pub fn new(handler: Arc<dyn Handler>) -> Self {
		Self {
			middlewares: Vec::new(),
			handler,
		}
	}

	/// Appends a middleware to the chain.
	pub fn add(mut self, middleware: Arc<dyn Middleware>) -> Self {
		self.middlewares.push(middleware);
		self
	}

	/// Runs the request through every middleware and the terminal handler.
	pub async fn handle(&self, request: Request) -> Result<Response> {
		let mut next = self.handler.clone();
		for middleware in self.middlewares.iter().rev() {
			next = Arc::new(ChainLink {
				middleware: middleware.clone(),
				next,
			});
		}
		next.handle(request).await
	}
}

/// One middleware bound to the rest of the chain behind it.
struct ChainLink {
	middleware: Arc<dyn Middleware>,
	next: Arc<dyn Handler>,
}

#[async_trait]
impl Handler for ChainLink {
	async fn handle(&self, request: Request) -> Result<Response> {
		if !self.middleware.should_continue(&request) {
			trace!("middleware skipped by should_continue");
			return self.next.handle(request).await;
		}
		self.middleware.process(request, self.next.clone()).await
	}
}
