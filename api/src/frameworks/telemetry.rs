use crate::frameworks::config;
use std::time::Duration;

pub fn init_tracing() {
    let default_level = if config::production() { "info" } else { "debug" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub fn init_sentry() -> Result<sentry::ClientInitGuard, String> {
    let dsn = parse_dsn(config::sentry_dsn())?;
    if dsn.is_none() {
        tracing::warn!("SENTRY_DSN not set; error reports are dropped.");
    }

    Ok(sentry::init(sentry::ClientOptions {
        dsn,
        release: sentry::release_name!(),
        environment: Some(config::environment().into()),
        traces_sample_rate: 1.0,
        shutdown_timeout: Duration::from_secs(2),
        ..Default::default()
    }))
}

pub fn parse_dsn(raw: Option<String>) -> Result<Option<sentry::types::Dsn>, String> {
    raw.map(|raw| {
        raw.parse::<sentry::types::Dsn>()
            .map_err(|e| format!("invalid SENTRY_DSN: {e}"))
    })
    .transpose()
}
