use crate::interface_adapters::cors::{answer_options, cors_layer};
use crate::interface_adapters::handlers::{bad, good};
use crate::interface_adapters::state::AppState;
use axum::{Router, extract::Request, middleware, routing::get};
use sentry::integrations::tower::NewSentryLayer;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/good", get(good))
        .route("/bad", get(bad))
        .layer(middleware::from_fn(answer_options))
        .layer(cors_layer())
        .layer(NewSentryLayer::<Request>::new_from_top())
        .with_state(state)
}
