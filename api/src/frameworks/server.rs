use crate::frameworks::{config, db, telemetry};
use crate::interface_adapters::reporter::SentryReporter;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::AppState;
use std::io::{Error, Result};
use std::sync::Arc;

pub async fn run() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();
    let _sentry = telemetry::init_sentry().map_err(|e| {
        tracing::error!(error = %e, "failed to initialize sentry");
        Error::other(e)
    })?;

    let database_url = config::database_url();
    let db = db::connect_pool(&database_url).await.map_err(|e| {
        tracing::error!(error = %e, "failed to connect to database");
        Error::other(e)
    })?;
    tracing::debug!("database ready.");

    let state = AppState {
        db: db.clone(),
        reporter: Arc::new(SentryReporter),
    };
    let app = app(state);

    let addr = config::listen_addr().map_err(Error::other)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .inspect_err(|e| {
            tracing::error!(%addr, error = %e, "failed to bind");
        })?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "server error");
        })?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::debug!("shutting down server gracefully");
}
