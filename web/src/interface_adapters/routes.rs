use crate::interface_adapters::handlers::pages::{bad_page, good_page, home};
use crate::interface_adapters::state::AppState;
use axum::{Router, extract::Request, routing::get};
use sentry::integrations::tower::NewSentryLayer;
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    // Every request gets its own Sentry hub so scopes never leak between renders.
    Router::new()
        .route("/", get(home))
        .route("/good", get(good_page))
        .route("/bad", get(bad_page))
        .layer(NewSentryLayer::<Request>::new_from_top())
        .with_state(state)
}
