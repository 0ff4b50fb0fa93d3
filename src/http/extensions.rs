//! Type-safe attribute storage attached to requests.
//!
//! Middleware communicates with downstream handlers by inserting values
//! into a request's extensions. Entries are keyed by type, so each
//! middleware defines its own attribute type and cannot collide with
//! others.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Type-keyed storage for request attributes.
///
/// Cloning an `Extensions` is cheap and yields a handle to the same
/// underlying map, which is what lets a request value be handed through
/// the middleware chain while attributes inserted along the way remain
/// visible to every later stage.
///
/// # Examples
///
/// ```
/// use basic_authentication::Extensions;
///
/// let extensions = Extensions::new();
/// extensions.insert(7u32);
///
/// assert_eq!(extensions.get::<u32>(), Some(7));
/// assert!(extensions.get::<String>().is_none());
/// ```
#[derive(Clone, Default)]
pub struct Extensions {
	map: Arc<Mutex<HashMap<TypeId, Box<dyn Any + Send + Sync>>>>,
}

impl Extensions {
	/// Creates empty storage.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a value, replacing any previous value of the same type.
	pub fn insert<T: Send + Sync + 'static>(&self, value: T) {
		let mut map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		map.insert(TypeId::of::<T>(), Box::new(value));
	}

	/// Returns a clone of the stored value of type `T`, if present.
	pub fn get<T>(&self) -> Option<T>
	where
		T: Clone + Send + Sync + 'static,
	{
		let map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		map.get(&TypeId::of::<T>())
			.and_then(|boxed| boxed.downcast_ref::<T>())
			.cloned()
	}

	/// Returns true if a value of type `T` is stored.
	pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
		let map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		map.contains_key(&TypeId::of::<T>())
	}

	/// Removes and returns the stored value of type `T`, if present.
	pub fn remove<T>(&self) -> Option<T>
	where
		T: Send + Sync + 'static,
	{
		let mut map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		let boxed = map.remove(&TypeId::of::<T>())?;
		boxed.downcast::<T>().ok().map(|value| *value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	struct Marker(&'static str);

	#[test]
	fn insert_and_get() {
		let extensions = Extensions::new();
		extensions.insert(Marker("alpha"));

		assert_eq!(extensions.get::<Marker>(), Some(Marker("alpha")));
	}

	#[test]
	fn get_missing_type_is_none() {
		let extensions = Extensions::new();

		assert_eq!(extensions.get::<Marker>(), None);
		assert!(!extensions.contains::<Marker>());
	}

	#[test]
	fn insert_replaces_previous_value() {
		let extensions = Extensions::new();
		extensions.insert(Marker("first"));
		extensions.insert(Marker("second"));

		assert_eq!(extensions.get::<Marker>(), Some(Marker("second")));
	}

	#[test]
	fn remove_takes_the_value_out() {
		let extensions = Extensions::new();
		extensions.insert(Marker("gone"));

		assert_eq!(extensions.remove::<Marker>(), Some(Marker("gone")));
		assert!(!extensions.contains::<Marker>());
	}

	#[test]
	fn clones_share_storage() {
		let extensions = Extensions::new();
		let handle = extensions.clone();
		handle.insert(Marker("shared"));

		assert_eq!(extensions.get::<Marker>(), Some(Marker("shared")));
	}
}
