use crate::domain::ports::ErrorReporter;

// Captures on the hub bound to the current request by `NewSentryLayer`.
#[derive(Clone, Copy, Default)]
pub struct SentryReporter;

impl ErrorReporter for SentryReporter {
    fn capture(&self, error: &(dyn std::error::Error + 'static)) {
        let event_id = sentry::Hub::current().capture_error(error);
        tracing::debug!(%event_id, "error captured.");
    }
}
