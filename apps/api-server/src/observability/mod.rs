//! Observability module - request IDs on top of tracing.

mod request_id;

pub use request_id::RequestIdMiddleware;
