//! The request value passed through the middleware chain.

use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};

use crate::exception::{Error, Result};

use super::Extensions;

/// An inbound HTTP request.
///
/// Requests are passed by value through the chain: a middleware that
/// wants to attach data for downstream stages inserts it into
/// [`extensions`](Self::extensions) and hands the request on. The
/// original value is never observable again, so attachment behaves as a
/// derived copy.
///
/// # Examples
///
/// ```
/// use basic_authentication::Request;
/// use hyper::Method;
///
/// let request = Request::builder()
///     .method(Method::GET)
///     .uri("/protected")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.uri.path(), "/protected");
/// ```
#[derive(Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	pub extensions: Extensions,
}

impl Request {
	/// Creates a request from its parts.
	pub fn new(method: Method, uri: Uri, version: Version, headers: HeaderMap, body: Bytes) -> Self {
		Self {
			method,
			uri,
			version,
			headers,
			body,
			extensions: Extensions::new(),
		}
	}

	/// Returns a builder with GET, HTTP/1.1 and empty headers as defaults.
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}

	/// Ordered values of the named header, skipping non-UTF-8 values.
	///
	/// A request may carry a header more than once; callers that care
	/// about all instances must use this instead of a single `get`.
	pub fn header_values(&self, name: &str) -> Vec<&str> {
		self.headers
			.get_all(name)
			.iter()
			.filter_map(|value| value.to_str().ok())
			.collect()
	}
}

/// Builder for [`Request`].
#[derive(Default)]
pub struct RequestBuilder {
	method: Option<Method>,
	uri: Option<String>,
	version: Option<Version>,
	headers: HeaderMap,
	body: Bytes,
}

impl RequestBuilder {
	pub fn method(mut self, method: Method) -> Self {
		self.method = Some(method);
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = Some(uri.into());
		self
	}

	pub fn version(mut self, version: Version) -> Self {
		self.version = Some(version);
		self
	}

	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	/// Appends a single header, keeping any values already present
	/// under the same name.
	pub fn header(mut self, name: &'static str, value: &str) -> Self {
		if let Ok(value) = value.parse() {
			self.headers.append(name, value);
		}
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	pub fn build(self) -> Result<Request> {
		let uri = self
			.uri
			.unwrap_or_else(|| "/".to_string())
			.parse::<Uri>()
			.map_err(|e| Error::InvalidRequest(e.to_string()))?;

		Ok(Request {
			method: self.method.unwrap_or(Method::GET),
			uri,
			version: self.version.unwrap_or(Version::HTTP_11),
			headers: self.headers,
			body: self.body,
			extensions: Extensions::new(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builder_defaults() {
		let request = Request::builder().build().unwrap();

		assert_eq!(request.method, Method::GET);
		assert_eq!(request.uri.path(), "/");
		assert_eq!(request.version, Version::HTTP_11);
		assert!(request.headers.is_empty());
	}

	#[test]
	fn builder_rejects_invalid_uri() {
		let result = Request::builder().uri("http://[invalid").build();

		assert!(result.is_err());
	}

	#[test]
	fn header_values_preserves_order_of_repeated_headers() {
		let request = Request::builder()
			.header("authorization", "Bearer one")
			.header("authorization", "Basic two")
			.build()
			.unwrap();

		assert_eq!(
			request.header_values("authorization"),
			vec!["Bearer one", "Basic two"]
		);
	}

	#[test]
	fn header_values_is_empty_when_header_absent() {
		let request = Request::builder().build().unwrap();

		assert!(request.header_values("authorization").is_empty());
	}
}
