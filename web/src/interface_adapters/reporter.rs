use crate::domain::{ErrorReporter, ReportContext};

// Forwards captured errors to Sentry through the hub bound to the current
// request. Does nothing when no DSN is configured.
#[derive(Clone, Copy, Default)]
pub struct SentryReporter;

impl ErrorReporter for SentryReporter {
    fn capture(&self, error: &(dyn std::error::Error + 'static), context: &ReportContext) {
        let user = context.user.as_ref().map(|user| sentry::User {
            id: Some(user.id.to_string()),
            email: Some(user.email.clone()),
            ..Default::default()
        });

        let event_id = sentry::with_scope(
            |scope| scope.set_user(user),
            || sentry::capture_error(error),
        );
        tracing::debug!(%event_id, "error captured.");
    }
}
