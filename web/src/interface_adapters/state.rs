use crate::domain::{Backend, ErrorReporter};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // Arc<dyn Trait> lets tests swap in fakes for the API and Sentry.
    pub backend: Arc<dyn Backend>,
    pub reporter: Arc<dyn ErrorReporter>,
}
