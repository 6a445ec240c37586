use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Turn a handler panic into the standard 500 JSON error body.
///
/// The panic payload is logged; the client only sees the generic message.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::InternalError(format!("handler panicked: {detail}")).into_response()
}
