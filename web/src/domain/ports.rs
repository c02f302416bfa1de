use async_trait::async_trait;

use crate::domain::errors::FetchError;
use crate::domain::report::ReportContext;

// Raw answer from the backend. Status is kept as a bare code so the domain
// does not depend on an HTTP crate.
#[derive(Debug)]
pub struct BackendResponse {
    pub status: u16,
    pub reason: Option<String>,
    pub body: Result<String, FetchError>,
}

impl BackendResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// The use case depends on this trait, not the reqwest client.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn fetch(&self, path: &str, no_store: bool) -> Result<BackendResponse, FetchError>;
}

// Fire-and-forget sink for captured errors.
pub trait ErrorReporter: Send + Sync {
    fn capture(&self, error: &(dyn std::error::Error + 'static), context: &ReportContext);
}
