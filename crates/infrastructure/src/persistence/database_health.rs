//! SQLite database health adapter
//!
//! Implements the `DatabaseHealthPort` with a trivial query on the sqlx pool.

use application::{
    error::ApplicationError,
    ports::{DatabaseHealth, DatabaseHealthPort},
};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, instrument, warn};

use super::error::map_sqlx_error;

/// SQLite database health adapter
#[derive(Debug, Clone)]
pub struct SqliteDatabaseHealth {
    pool: SqlitePool,
}

impl SqliteDatabaseHealth {
    /// Create a new database health adapter with the given pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseHealthPort for SqliteDatabaseHealth {
    #[instrument(skip(self))]
    async fn check_health(&self) -> Result<DatabaseHealth, ApplicationError> {
        let version: String = sqlx::query_scalar("SELECT sqlite_version()")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Database health check failed");
                map_sqlx_error(e)
            })?;

        debug!(%version, "Database health check passed");
        Ok(DatabaseHealth::healthy_with_version(format!(
            "SQLite {version}"
        )))
    }
}
