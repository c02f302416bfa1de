use crate::frameworks::{config, telemetry};
use crate::interface_adapters::clients::ApiClient;
use crate::interface_adapters::reporter::SentryReporter;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::io::Result;
use std::sync::Arc;

// Serve the pages on an already bound listener until Ctrl-C.
pub async fn run(listener: tokio::net::TcpListener, state: Arc<AppState>) -> Result<()> {
    let addr = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%addr, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "server error");
        })
}

pub async fn run_with_config() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();
    let _sentry = telemetry::init_sentry().map_err(|e| {
        tracing::error!(error = %e, "failed to initialize sentry");
        std::io::Error::other(e)
    })?;

    let api_url = config::api_url().map_err(|e| {
        tracing::error!(error = %e, "failed to read api url");
        std::io::Error::other(e)
    })?;
    tracing::debug!(api_url = %api_url, "api client configured.");

    let state = Arc::new(AppState {
        backend: Arc::new(ApiClient::new(api_url)),
        reporter: Arc::new(SentryReporter),
    });

    let addr = config::listen_addr().map_err(std::io::Error::other)?;

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .inspect_err(|e| {
            tracing::error!(%addr, error = %e, "failed to bind");
        })?;

    run(listener, state).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::debug!("shutting down server gracefully");
}
