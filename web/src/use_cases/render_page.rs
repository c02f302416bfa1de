use crate::domain::{Backend, ErrorReporter, FetchError, PageKind, RenderedPage, ReportContext};

// Fetch-and-display flow shared by both pages. Each execution performs one
// outbound request and reports at most one error.
pub struct RenderPageUseCase<'a> {
    pub backend: &'a dyn Backend,
    pub reporter: &'a dyn ErrorReporter,
}

impl RenderPageUseCase<'_> {
    pub async fn execute(&self, kind: PageKind) -> RenderedPage {
        let body = match kind {
            PageKind::Good => self.fetch_or_empty(kind).await,
            PageKind::Bad => self.fetch_reporting_status(kind).await,
        };

        RenderedPage { kind, body }
    }

    // Any failure is reported and the page falls back to the empty string.
    async fn fetch_or_empty(&self, kind: PageKind) -> String {
        match self.fetch_text(kind).await {
            Ok(body) => body,
            Err(err) => {
                self.report(&err);
                String::new()
            }
        }
    }

    // A non-2xx answer is reported but its body is still displayed.
    async fn fetch_reporting_status(&self, kind: PageKind) -> String {
        let response = match self
            .backend
            .fetch(kind.backend_path(), kind.no_store())
            .await
        {
            Ok(response) => response,
            Err(err) => {
                self.report(&err);
                return String::new();
            }
        };

        if !response.is_success() {
            tracing::warn!(status = response.status, "bad response from backend");
            self.report(&FetchError::BadResponse);
            return response.body.unwrap_or_default();
        }

        response.body.unwrap_or_else(|err| {
            self.report(&err);
            String::new()
        })
    }

    async fn fetch_text(&self, kind: PageKind) -> Result<String, FetchError> {
        let response = self
            .backend
            .fetch(kind.backend_path(), kind.no_store())
            .await?;

        if !response.is_success() {
            return Err(FetchError::Status {
                code: response.status,
                reason: response.reason,
            });
        }

        response.body
    }

    fn report(&self, err: &FetchError) {
        tracing::error!(error = %err, "page fetch failed");
        self.reporter.capture(err, &ReportContext::demo_user());
    }
}
