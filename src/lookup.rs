//! Resolving a claimed identity to a stored session record.

use async_trait::async_trait;

use crate::exception::Result;
use crate::session::UserSession;

/// Resolves an identity string to a stored [`UserSession`], or absence.
///
/// Owned by the host application and injected into
/// [`BasicAuthentication`](crate::BasicAuthentication) at construction.
/// `Ok(None)` is the normal "unknown identity" outcome, not a failure;
/// an `Err` means the collaborator itself broke (for example a database
/// went away) and propagates uncaught through the middleware.
///
/// Implementations may perform I/O and must be safe to call from
/// concurrent requests; this crate documents that requirement but does
/// not enforce it beyond the `Send + Sync` bounds.
#[async_trait]
pub trait SessionLookup: Send + Sync {
	async fn lookup(&self, identity: &str) -> Result<Option<UserSession>>;
}

/// Adapts a plain closure into a [`SessionLookup`].
///
/// Convenient for in-memory tables and tests.
///
/// # Examples
///
/// ```
/// use basic_authentication::{LookupFn, UserSession};
///
/// let lookup = LookupFn::new(|identity: &str| {
///     (identity == "alice@example.com")
///         .then(|| UserSession::new(identity, "stored-hash"))
/// });
/// ```
pub struct LookupFn<F> {
	callback: F,
}

impl<F> LookupFn<F>
where
	F: Fn(&str) -> Option<UserSession> + Send + Sync,
{
	pub fn new(callback: F) -> Self {
		Self { callback }
	}
}

#[async_trait]
impl<F> SessionLookup for LookupFn<F>
where
	F: Fn(&str) -> Option<UserSession> + Send + Sync,
{
	async fn lookup(&self, identity: &str) -> Result<Option<UserSession>> {
		Ok((self.callback)(identity))
	}
}
