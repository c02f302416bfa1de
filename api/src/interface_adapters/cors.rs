use axum::{
    extract::Request,
    http::{HeaderName, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{Any, CorsLayer};

// Lets the browser-side SDK call the API and propagate its trace headers.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("baggage"),
            HeaderName::from_static("sentry-trace"),
        ])
}

// CorsLayer only answers real preflights; any other OPTIONS gets a bare 200
// here instead of reaching a handler.
pub async fn answer_options(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(request).await
}
