//! Prometheus metrics endpoint.

use std::time::Instant;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::routes::PROMETHEUS_CONTENT_TYPE;

/// State behind `/metrics`: the recorder handle plus the server start time.
#[derive(Clone)]
pub struct MetricsState {
    handle: PrometheusHandle,
    started_at: Instant,
}

impl MetricsState {
    pub fn new(handle: PrometheusHandle) -> Self {
        Self {
            handle,
            started_at: Instant::now(),
        }
    }
}

/// GET /metrics — refreshes the uptime gauge and renders every recorded metric.
pub async fn get(State(state): State<MetricsState>) -> impl IntoResponse {
    ::metrics::gauge!("mission_board_uptime_seconds")
        .set(state.started_at.elapsed().as_secs_f64());

    ([(CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], state.handle.render())
}
