//! Request ID middleware

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::Instant;
use tracing::Span;
use uuid::Uuid;

use crate::request_context::RequestContext;

/// Request ID middleware.
///
/// Uses the caller's `X-Request-Id` as the transaction id, or generates one
/// when absent. The id is made available to handlers via a
/// [`RequestContext`] extension (from where it is propagated to upstream
/// calls) and echoed on the response.
#[tracing::instrument(
    name = "http_request",
    skip_all,
    fields(
        http.method = %req.method(),
        http.route = %req.uri().path(),
        http.response.status_code = tracing::field::Empty,
        request_id = tracing::field::Empty,
    )
)]
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let current_span = Span::current();
    let start = Instant::now();

    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| format!("tid_{}", Uuid::new_v4().simple()));
    current_span.record("request_id", request_id.as_str());

    // Make the transaction id available to handlers.
    req.extensions_mut().insert(RequestContext {
        request_id: request_id.clone(),
    });

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut response = next.run(req).await;

    let status = response.status();
    current_span.record("http.response.status_code", status.as_u16());

    tracing::info!(
        method = %method,
        path = %path,
        status = %status.as_u16(),
        duration_ms = start.elapsed().as_millis(),
        request_id = %request_id,
        "Request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", value);
    }

    response
}
