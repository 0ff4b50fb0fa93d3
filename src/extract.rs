//! Extracting Basic credentials from `Authorization` headers.

use base64::{Engine, engine::general_purpose::STANDARD};
use hyper::HeaderMap;
use hyper::header::AUTHORIZATION;

/// A credential pair extracted from an `Authorization: Basic` header.
///
/// Transport-level only: decoded once per request and dropped after
/// verification, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
	pub identity: String,
	pub password: String,
}

/// Finds the first well-formed Basic credential pair on the request.
///
/// Every `Authorization` value is tried in header order; a value that is
/// not the case-sensitive `Basic` scheme, is not valid standard base64,
/// or decodes to a string without a `:` is simply skipped. `None` means
/// "no credentials found" — malformed input is never an error.
pub fn extract_credentials(headers: &HeaderMap) -> Option<Credentials> {
	headers
		.get_all(AUTHORIZATION)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.find_map(parse_basic_value)
}

/// Parses a single header value of the form `Basic <base64(identity:password)>`.
fn parse_basic_value(value: &str) -> Option<Credentials> {
	let (scheme, token) = value.split_once(' ')?;
	if scheme != "Basic" || token.is_empty() {
		return None;
	}

	let decoded = STANDARD.decode(token).ok()?;
	let decoded = String::from_utf8(decoded).ok()?;

	// Split on the first colon only; passwords may themselves contain ':'.
	let (identity, password) = decoded.split_once(':')?;

	Some(Credentials {
		identity: identity.to_string(),
		password: password.to_string(),
	})
}
