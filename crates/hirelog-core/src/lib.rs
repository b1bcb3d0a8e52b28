//! Shared HTTP plumbing for the Hirelog workspace: health handlers,
//! tracing setup, request-id middleware, the response envelope, and
//! serde helpers.

pub mod health;
pub mod middleware;
pub mod response;
pub mod serde;
pub mod tracing;
