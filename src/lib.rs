//! # basic-authentication
//!
//! HTTP Basic Authentication as a single pluggable middleware for an
//! async request pipeline.
//!
//! The middleware inspects an inbound request's `Authorization` header,
//! extracts the `(identity, password)` pair per RFC 7617, resolves the
//! identity to a stored [`UserSession`] through a host-supplied
//! [`SessionLookup`], verifies the password through a host-supplied
//! [`PasswordVerifier`], and on success attaches the password-scrubbed
//! session to the request for downstream handlers. It always forwards
//! the request and never rejects it; "no session attached" is the sole
//! failure signal.
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use basic_authentication::{BasicAuthentication, LookupFn, UserSession};
//! # #[cfg(feature = "argon2-verifier")]
//! use basic_authentication::Argon2Verifier;
//!
//! # #[cfg(feature = "argon2-verifier")]
//! # {
//! // The lookup is owned by the host application: identity in,
//! // session record (with its stored password hash) or absence out.
//! let lookup = LookupFn::new(|identity: &str| {
//!     (identity == "alice@example.com").then(|| {
//!         UserSession::new(identity, "$argon2id$v=19$m=19456,t=2,p=1$...")
//!             .with_level("user")
//!     })
//! });
//!
//! let auth = BasicAuthentication::new(Arc::new(lookup), Arc::new(Argon2Verifier::new()));
//! # let _ = auth;
//! # }
//! ```
//!
//! ## Design
//!
//! - Collaborators are injected at construction, not registered in
//!   process-wide state, so tests and applications compose them freely.
//! - Malformed headers, unknown identities, and wrong passwords are
//!   silently identical from the outside and never logged, preventing
//!   identity-existence probing.
//! - Errors returned by a collaborator propagate uncaught: they are
//!   integration faults, not authentication outcomes.
//!
//! ## Feature flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `argon2-verifier` | enabled | Bundled [`Argon2Verifier`] for PHC-formatted hashes |

pub mod basic;
pub mod exception;
pub mod extract;
pub mod http;
pub mod lookup;
pub mod session;
pub mod verify;

pub use basic::BasicAuthentication;
pub use exception::{Error, Result};
pub use extract::{Credentials, extract_credentials};
pub use http::{Extensions, Handler, Middleware, MiddlewareChain, Request, RequestBuilder, Response};
pub use lookup::{LookupFn, SessionLookup};
pub use session::UserSession;
#[cfg(feature = "argon2-verifier")]
pub use verify::Argon2Verifier;
pub use verify::PasswordVerifier;
