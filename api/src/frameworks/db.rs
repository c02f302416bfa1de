use sqlx::{Connection, SqlitePool, sqlite::SqlitePoolOptions};

// Build a small SQLite pool for the API and make sure it answers.
pub async fn connect_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    pool.acquire().await?.ping().await?;

    Ok(pool)
}
