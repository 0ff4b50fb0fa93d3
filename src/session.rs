//! The authenticated principal attached to a request.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A session record for an authenticated principal.
///
/// Records are constructed by the host application's lookup collaborator
/// — never by this crate — carrying the stored password hash so the
/// middleware can verify against it. Before a record is attached to a
/// request its password is irrevocably cleared: downstream code never
/// observes a session with a password present, and the field is skipped
/// during serialization as well.
///
/// # Examples
///
/// ```
/// use basic_authentication::UserSession;
///
/// let mut session = UserSession::new("alice@example.com", "$argon2id$...")
///     .with_level("moderator")
///     .with_attribute("display_name", "Alice");
///
/// session.clear_password();
///
/// assert_eq!(session.id(), "alice@example.com");
/// assert_eq!(session.level(), Some("moderator"));
/// assert!(session.password().is_none());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserSession {
	id: String,
	#[serde(skip)]
	password: Option<String>,
	level: Option<String>,
	attributes: Map<String, Value>,
}

impl UserSession {
	/// Creates a record for `id` with the stored password hash.
	pub fn new(id: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			password: Some(password.into()),
			level: None,
			attributes: Map::new(),
		}
	}

	/// Sets the opaque access-level tag.
	pub fn with_level(mut self, level: impl Into<String>) -> Self {
		self.level = Some(level.into());
		self
	}

	/// Adds an entry to the open attribute bag.
	///
	/// Attributes are opaque to this crate and forwarded unchanged to
	/// downstream consumers; insertion order is preserved.
	pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.attributes.insert(key.into(), value.into());
		self
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	/// The stored password hash, present only until verification completes.
	pub fn password(&self) -> Option<&str> {
		self.password.as_deref()
	}

	pub fn level(&self) -> Option<&str> {
		self.level.as_deref()
	}

	pub fn attributes(&self) -> &Map<String, Value> {
		&self.attributes
	}

	/// Irrevocably clears the stored password.
	///
	/// Called by the middleware before the record is attached to a
	/// request; there is no way to set a password afterwards.
	pub fn clear_password(&mut self) {
		self.password = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_record_carries_the_stored_password() {
		let session = UserSession::new("u-1", "hash");

		assert_eq!(session.password(), Some("hash"));
	}

	#[test]
	fn clear_password_is_irrevocable() {
		let mut session = UserSession::new("u-1", "hash");
		session.clear_password();

		assert!(session.password().is_none());
	}

	#[test]
	fn attributes_preserve_insertion_order() {
		let session = UserSession::new("u-1", "hash")
			.with_attribute("zeta", 1)
			.with_attribute("alpha", 2);

		let keys: Vec<&str> = session.attributes().keys().map(|k| k.as_str()).collect();
		assert_eq!(keys, vec!["zeta", "alpha"]);
	}

	#[test]
	fn password_is_never_serialized() {
		let session = UserSession::new("u-1", "hash").with_level("user");
		let json = serde_json::to_value(&session).unwrap();

		assert!(json.get("password").is_none());
		assert_eq!(json["id"], "u-1");
		assert_eq!(json["level"], "user");
	}
}
