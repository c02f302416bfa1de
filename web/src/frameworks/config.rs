use std::{env, net::SocketAddr};
use url::Url;

// Runtime settings, all read from the environment (.env is loaded first).
// Each reader delegates to a pure parser so defaults and failures are testable.

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_API_URL: &str = "http://localhost:8080";

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
    parse_listen_addr(env::var("WEB_ADDR").ok())
}

pub fn api_url() -> Result<Url, String> {
    parse_api_url(env::var("API_URL").ok())
}

pub fn sentry_dsn() -> Option<String> {
    parse_sentry_dsn(env::var("SENTRY_DSN").ok())
}

pub fn parse_listen_addr(raw: Option<String>) -> Result<SocketAddr, String> {
    let raw = raw.unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
    raw.parse()
        .map_err(|e| format!("invalid WEB_ADDR {raw:?}: {e}"))
}

pub fn parse_api_url(raw: Option<String>) -> Result<Url, String> {
    let raw = raw.unwrap_or_else(|| DEFAULT_API_URL.to_string());
    Url::parse(&raw).map_err(|e| format!("invalid API_URL {raw:?}: {e}"))
}

// A blank DSN means reporting is disabled.
pub fn parse_sentry_dsn(raw: Option<String>) -> Option<String> {
    raw.filter(|dsn| !dsn.trim().is_empty())
}
