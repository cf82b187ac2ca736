//! API middleware

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::info;

/// Request logging middleware
///
/// Logs method, path, status, and latency for every request
pub async fn request_logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}
