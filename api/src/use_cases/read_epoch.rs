use crate::domain::errors::ApiError;
use crate::domain::ports::EpochSource;
use crate::domain::queries::EpochQuery;

// Read epoch use case with injected dependencies.
pub struct ReadEpochUseCase<S> {
    pub source: S,
}

impl<S> ReadEpochUseCase<S>
where
    S: EpochSource,
{
    pub async fn execute(&self, query: EpochQuery) -> Result<i64, ApiError> {
        self.source
            .unix_epoch(query)
            .await
            .map_err(ApiError::QueryFailed)
    }
}
