use std::{env, net::SocketAddr};

// Runtime settings, all read from the environment (.env is loaded first).

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

pub fn production() -> bool {
    matches!(env::var("PRODUCTION").as_deref(), Ok("true"))
}

pub fn environment() -> &'static str {
    if production() {
        "production"
    } else {
        "development"
    }
}

pub fn listen_addr() -> Result<SocketAddr, String> {
    parse_listen_addr(env::var("API_ADDR").ok())
}

pub fn database_url() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

pub fn sentry_dsn() -> Option<String> {
    parse_sentry_dsn(env::var("SENTRY_DSN").ok())
}

pub fn parse_listen_addr(raw: Option<String>) -> Result<SocketAddr, String> {
    let raw = raw.unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
    raw.parse()
        .map_err(|e| format!("invalid API_ADDR {raw:?}: {e}"))
}

pub fn parse_sentry_dsn(raw: Option<String>) -> Option<String> {
    raw.filter(|dsn| !dsn.trim().is_empty())
}
