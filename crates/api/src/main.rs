//! Mission board server entry point.

use std::process::ExitCode;

use api::Config;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, shutting down server");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, shutting down server");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env();

    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Install Prometheus metrics recorder
    let metrics_handle = match metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
    {
        Ok(handle) => handle,
        Err(err) => {
            tracing::error!(error = %err, "failed to install Prometheus recorder");
            return ExitCode::FAILURE;
        }
    };

    // 3. Build the application around the built-in catalog
    let state = api::create_default_state();
    let app = api::create_app(state, metrics_handle);

    // 4. Bind; a bind failure is fatal
    let listener = match api::bind(&config).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, "failed to start server");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        addr = %config.addr(),
        url = %config.public_url(),
        "mission board server started"
    );

    // 5. Serve until SIGINT/SIGTERM
    if let Err(err) = api::serve(listener, app, shutdown_signal()).await {
        tracing::error!(error = %err, "server error");
        return ExitCode::FAILURE;
    }

    tracing::info!("server shut down");
    ExitCode::SUCCESS
}
