use crate::domain::ports::ErrorReporter;
use crate::domain::queries::EpochQuery;
use crate::interface_adapters::state::{AppState, SqliteEpochSource};
use crate::use_cases::read_epoch::ReadEpochUseCase;
use axum::{extract::State, http::StatusCode};

// Handler whose query succeeds.
#[tracing::instrument(name = "good", skip_all)]
pub async fn good(State(state): State<AppState>) -> Result<String, StatusCode> {
    read_epoch(&state, EpochQuery::Current).await
}

// Handler whose query always fails, to exercise error reporting.
#[tracing::instrument(name = "bad", skip_all)]
pub async fn bad(State(state): State<AppState>) -> Result<String, StatusCode> {
    read_epoch(&state, EpochQuery::Broken).await
}

async fn read_epoch(state: &AppState, query: EpochQuery) -> Result<String, StatusCode> {
    let use_case = ReadEpochUseCase {
        source: SqliteEpochSource {
            db: state.db.clone(),
        },
    };

    match use_case.execute(query).await {
        Ok(epoch) => Ok(format!("Current epoch: {epoch}")),
        Err(err) => Err(http_error(state.reporter.as_ref(), &err)),
    }
}

// Logs and reports a failure, then hands back the status to send.
fn http_error(reporter: &dyn ErrorReporter, err: &(dyn std::error::Error + 'static)) -> StatusCode {
    tracing::error!(error = %err, "request failed");
    reporter.capture(err);
    StatusCode::INTERNAL_SERVER_ERROR
}
