//! HTTP API server for the mission board dashboard.
//!
//! Serves the read-only satellite catalog at `/satellites` and a health check
//! at `/health`, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use catalog::{SatelliteCatalog, SatelliteProvider};
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{ApiError, ServerError};
use routes::satellites::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<P: SatelliteProvider>(
    state: Arc<AppState<P>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(routes::metrics::MetricsState::new(metrics_handle));

    Router::new()
        .route("/satellites", routes::satellites::method_router::<P>())
        .route("/health", routes::health::method_router())
        .with_state(state)
        .merge(metrics_router)
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state backed by the built-in catalog.
pub fn create_default_state() -> Arc<AppState<SatelliteCatalog>> {
    Arc::new(AppState {
        provider: SatelliteCatalog::new(),
    })
}

/// Binds the listening socket described by `config`.
///
/// Failure here is fatal for the process; it is never retried.
pub async fn bind(config: &Config) -> Result<TcpListener, ServerError> {
    let addr = config.addr();
    match TcpListener::bind(&addr).await {
        Ok(listener) => Ok(listener),
        Err(source) => Err(ServerError::Bind { addr, source }),
    }
}

/// Serves `app` on `listener` until `shutdown` resolves.
///
/// Once `shutdown` fires the listener stops accepting and is dropped.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
