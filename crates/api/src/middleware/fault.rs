//! The fault boundary.
//!
//! Handlers report expected failures through [`crate::error::AppError`].
//! Everything else ends up here: panics are converted into the redacted 500
//! body, and every 5xx response is logged with the request URL, the client
//! agent and a UTC timestamp.

use std::any::Any;

use axum::extract::Request;
use axum::http::header::USER_AGENT;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

use crate::error::internal_error_response;

/// Panic handler for `CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(panic = %detail, "Handler panicked");
    internal_error_response()
}

/// `from_fn` middleware logging every server-error response.
pub async fn log_server_errors(req: Request, next: Next) -> Response {
    let url = req.uri().to_string();
    let origin = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let response = next.run(req).await;

    let status = response.status();
    if status.is_server_error() {
        tracing::error!(
            url = %url,
            origin = %origin,
            timestamp = %Utc::now().format("%b %d, %Y, %I:%M:%S %p UTC"),
            status = status.as_u16(),
            "Request failed",
        );
    }
    response
}
