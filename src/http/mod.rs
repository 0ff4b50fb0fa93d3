//! The pipeline seam: request/response values, type-safe request
//! attributes, and the middleware chain abstractions.

mod extensions;
mod middleware;
mod request;
mod response;

pub use extensions::Extensions;
pub use middleware::{Handler, Middleware, MiddlewareChain};
pub use request::{Request, RequestBuilder};
pub use response::Response;
