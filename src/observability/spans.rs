//! Per-request tracing spans.

use axum::body::Body;
use axum::http::Request;
use tracing::Span;

use crate::http::request::RequestIdExt;

/// Span opened by `TraceLayer` for every request.
pub fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request.request_id_str(),
    )
}
