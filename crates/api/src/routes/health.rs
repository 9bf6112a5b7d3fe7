//! Health check endpoint.

use axum::Json;
use axum::http::HeaderValue;
use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use axum::routing::{MethodRouter, any};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::set_header::SetResponseHeaderLayer;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// ANY /health — returns service health with the current time.
pub async fn check() -> Json<HealthResponse> {
    metrics::counter!("health_checks_total").increment(1);
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
    })
}

/// Method router for `/health`: every verb is answered, with an open origin.
pub fn method_router<S>() -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    any(check).layer(SetResponseHeaderLayer::overriding(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    ))
}
