//! HTTP route handlers.

pub mod health;
pub mod metrics;
pub mod satellites;

use axum::http::Uri;

use crate::error::ApiError;

/// Content type of every JSON body the API writes by hand.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Content type of the Prometheus text exposition format.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Fallback for unmapped paths.
pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!(%uri, "no route for path");
    ApiError::NotFound
}
