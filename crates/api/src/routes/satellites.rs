//! Satellite listing endpoint.
//!
//! Every response from `/satellites`, errors and preflight included, carries
//! the same three CORS headers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{MethodRouter, get};
use catalog::SatelliteProvider;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::error::ApiError;
use crate::routes::JSON_CONTENT_TYPE;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Shared application state accessible from the satellite handlers.
pub struct AppState<P: SatelliteProvider> {
    pub provider: P,
}

/// GET /satellites — render the catalog as JSON.
#[tracing::instrument(skip(state))]
pub async fn list<P: SatelliteProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> Result<impl IntoResponse, ApiError> {
    metrics::counter!("satellite_requests_total").increment(1);

    let body = state.provider.to_json().inspect_err(|_| {
        metrics::counter!("satellite_errors_total").increment(1);
    })?;

    Ok(([(CONTENT_TYPE, JSON_CONTENT_TYPE)], body))
}

/// OPTIONS /satellites — CORS preflight, headers only.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other verb on /satellites, HEAD included.
pub async fn method_not_allowed(method: Method) -> ApiError {
    tracing::debug!(%method, "rejected method on /satellites");
    ApiError::MethodNotAllowed
}

/// Method router for `/satellites` with its CORS headers applied to every
/// response.
pub fn method_router<P: SatelliteProvider>() -> MethodRouter<Arc<AppState<P>>> {
    let cors = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ));

    // HEAD is claimed explicitly, otherwise axum would answer it with `list`.
    get(list::<P>)
        .head(method_not_allowed)
        .options(preflight)
        .fallback(method_not_allowed)
        .layer(cors)
}
