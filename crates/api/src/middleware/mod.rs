//! Cross-cutting HTTP middleware.
//!
//! - [`request_log::with_request_logging`] -- per-request span and events.
//! - [`panic::panic_response`] -- JSON 500 body for handler panics.

pub mod panic;
pub mod request_log;

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";
