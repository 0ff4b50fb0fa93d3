//! The response value returned by handlers.

use bytes::Bytes;
use hyper::{HeaderMap, StatusCode};

/// An outbound HTTP response.
///
/// The authentication middleware never constructs or mutates responses;
/// it returns whatever the downstream handler produced. This type exists
/// so the pipeline seam is complete.
#[derive(Clone, Debug)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Creates a response with the given status and an empty body.
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// A `200 OK` response with an empty body.
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Replaces the body.
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// The body decoded as UTF-8, for assertions and diagnostics.
	pub fn body_text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ok_is_200_with_empty_body() {
		let response = Response::ok();

		assert_eq!(response.status, StatusCode::OK);
		assert!(response.body.is_empty());
	}

	#[test]
	fn with_body_replaces_body() {
		let response = Response::ok().with_body("hello".to_string());

		assert_eq!(response.body_text(), "hello");
	}
}
