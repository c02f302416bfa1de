use async_trait::async_trait;

use crate::domain::queries::EpochQuery;

// Port for the database lookup used by the epoch use case.
#[async_trait]
pub trait EpochSource: Send + Sync {
    async fn unix_epoch(&self, query: EpochQuery) -> Result<i64, String>;
}

// Port for forwarding handler failures to error monitoring.
pub trait ErrorReporter: Send + Sync {
    fn capture(&self, error: &(dyn std::error::Error + 'static));
}
