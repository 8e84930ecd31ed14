//! Database Module
//!
//! PostgreSQL connection pool, migrations, and the merge-patch query builder.

pub mod patch;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::DatabaseSettings;

pub use patch::PatchQuery;

/// Create a PostgreSQL connection pool
pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .connect(settings.connection_url())
        .await
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Check whether a row with `key_column = key` exists in `table`.
///
/// Table and column names are compile-time constants of the repositories,
/// never user input.
pub async fn row_exists(
    pool: &PgPool,
    table: &str,
    key_column: &str,
    key: &str,
) -> Result<bool, sqlx::Error> {
    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = $1)",
        table, key_column
    );

    sqlx::query_scalar::<_, bool>(&sql)
        .bind(key)
        .fetch_one(pool)
        .await
}
