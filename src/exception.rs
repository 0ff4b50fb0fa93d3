//! Error types shared across the pipeline and the authentication middleware.

use thiserror::Error;

/// Errors surfaced by the pipeline or by misbehaving collaborators.
///
/// Expected authentication failures (missing, malformed, or wrong
/// credentials) are *not* errors — they silently leave the request
/// without a session. Only collaborator failures (a lookup backend
/// going away, an unparseable stored hash) reach this type.
#[derive(Debug, Error)]
pub enum Error {
	/// The password verification primitive failed to run.
	#[error("authentication error: {0}")]
	Authentication(String),

	/// The session lookup collaborator failed.
	#[error("session lookup failed: {0}")]
	Lookup(String),

	/// A request value could not be constructed.
	#[error("invalid request: {0}")]
	InvalidRequest(String),

	/// A downstream handler failed.
	#[error("handler error: {0}")]
	Handler(String),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
