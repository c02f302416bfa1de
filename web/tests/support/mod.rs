// Shared bootstrapping for the page integration tests.
use axum::{Router, http::StatusCode, routing::get};
use std::sync::{Arc, Mutex};
use url::Url;
use web::domain::{ErrorReporter, ReportContext};
use web::interface_adapters::clients::ApiClient;
use web::interface_adapters::state::AppState;

// Reporter double shared between the test body and the spawned server.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    reports: Arc<Mutex<Vec<(String, ReportContext)>>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<(String, ReportContext)> {
        self.reports.lock().expect("reports mutex poisoned").clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn capture(&self, error: &(dyn std::error::Error + 'static), context: &ReportContext) {
        self.reports
            .lock()
            .expect("reports mutex poisoned")
            .push((error.to_string(), context.clone()));
    }
}

// Bind to an ephemeral port to avoid collisions with local services.
async fn bind_ephemeral() -> (tokio::net::TcpListener, String) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    (listener, format!("http://{addr}"))
}

// Stand-in for the backend API: /good answers 200, /bad answers 500.
pub async fn spawn_stub_api() -> String {
    let (listener, base_url) = bind_ephemeral().await;
    let app = Router::new()
        .route("/good", get(|| async { "ok" }))
        .route(
            "/bad",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "oops") }),
        );
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub api failed");
    });
    base_url
}

// An address nothing listens on, so connections are refused.
pub async fn refused_url() -> String {
    let (listener, base_url) = bind_ephemeral().await;
    drop(listener);
    base_url
}

// Start the web front-end against `api_url` and return its base URL.
pub async fn spawn_web(api_url: &str, reporter: RecordingReporter) -> String {
    let (listener, base_url) = bind_ephemeral().await;
    let state = Arc::new(AppState {
        backend: Arc::new(ApiClient::new(Url::parse(api_url).expect("valid api url"))),
        reporter: Arc::new(reporter),
    });
    tokio::spawn(async move {
        web::run(listener, state).await.expect("web server failed");
    });
    base_url
}
