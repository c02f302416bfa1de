use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::ports::{EpochSource, ErrorReporter};
use crate::domain::queries::EpochQuery;

// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub reporter: Arc<dyn ErrorReporter>,
}

// SQLite-backed epoch lookup.
#[derive(Clone)]
pub struct SqliteEpochSource {
    pub db: SqlitePool,
}

#[async_trait]
impl EpochSource for SqliteEpochSource {
    async fn unix_epoch(&self, query: EpochQuery) -> Result<i64, String> {
        let sql = match query {
            EpochQuery::Current => "SELECT unixepoch()",
            EpochQuery::Broken => "SELECT unixepochwrongfunction()",
        };

        sqlx::query_scalar::<_, i64>(sql)
            .fetch_one(&self.db)
            .await
            .map_err(|err| err.to_string())
    }
}
