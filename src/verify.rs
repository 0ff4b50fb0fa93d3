//! Password verification primitives.

use crate::exception::Result;

/// One-way comparison of a plaintext password against a stored hash.
///
/// This crate never computes or stores hashes itself; it only calls
/// `verify`. Implementations must be constant-time with respect to the
/// password (every serious password-hashing library already is).
///
/// `Ok(false)` is the normal "wrong password" outcome. An `Err` means
/// the primitive could not run at all — typically an unparseable stored
/// hash — and propagates uncaught through the middleware.
pub trait PasswordVerifier: Send + Sync {
	fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}

/// Argon2 verification of PHC-formatted stored hashes.
///
/// Accepts any hash the `argon2` crate can parse (argon2id, argon2i,
/// argon2d, with the parameters encoded in the PHC string itself).
#[cfg(feature = "argon2-verifier")]
pub struct Argon2Verifier;

#[cfg(feature = "argon2-verifier")]
impl Argon2Verifier {
	pub fn new() -> Self {
		Self
	}
}

#[cfg(feature = "argon2-verifier")]
impl Default for Argon2Verifier {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(feature = "argon2-verifier")]
impl PasswordVerifier for Argon2Verifier {
	fn verify(&self, password: &str, hash: &str) -> Result<bool> {
		use argon2::{
			Argon2,
			password_hash::{PasswordHash, PasswordVerifier as _},
		};

		let parsed_hash = PasswordHash::new(hash)
			.map_err(|e| crate::exception::Error::Authentication(e.to_string()))?;

		Ok(Argon2::default()
			.verify_password(password.as_bytes(), &parsed_hash)
			.is_ok())
	}
}
