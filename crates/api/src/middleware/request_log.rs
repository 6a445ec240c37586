//! Request logging middleware.
//!
//! Wraps every handler invocation in an INFO span carrying the method, path
//! and request id, and emits one event when the request arrives and one when
//! the response leaves. Handlers stay free of per-request boilerplate; their
//! own domain events nest inside the span.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::REQUEST_ID_HEADER;

/// Install the request logging layer on `router`.
///
/// Must be applied inside the layer that sets `x-request-id`, so the id is
/// already present when the span is created.
pub fn with_request_logging<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request_id,
                )
            })
            .on_request(|_request: &Request<Body>, _span: &Span| {
                tracing::info!("Request received");
            })
            .on_response(|response: &Response<Body>, latency: Duration, _span: &Span| {
                let status = response.status().as_u16();
                let latency_ms = latency.as_millis() as u64;
                if response.status().is_server_error() {
                    tracing::error!(status, latency_ms, "Request failed");
                } else if response.status().is_client_error() {
                    tracing::warn!(status, latency_ms, "Request rejected");
                } else {
                    tracing::info!(status, latency_ms, "Request completed");
                }
            }),
    )
}
