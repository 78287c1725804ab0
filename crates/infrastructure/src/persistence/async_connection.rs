//! SQLite pool shared by the city store and the readiness check.
//!
//! Connection pragmas are part of the connect options, so a connection the
//! pool opens later gets the same settings as the first one. Migrations are
//! embedded from the workspace `migrations/` directory.

use std::{path::Path, str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
};
use tracing::{debug, info, instrument};

/// How long a connection waits on a locked database before giving up.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Failure opening or migrating the database
#[derive(Debug, thiserror::Error)]
pub enum AsyncDatabaseError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Where the cities live and how many connections may reach them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsyncDatabaseConfig {
    /// sqlx URL, `sqlite:cityweather.db` or `sqlite::memory:`
    pub url: String,
    pub max_connections: u32,
}

impl Default for AsyncDatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:cityweather.db".to_string(),
            max_connections: 5,
        }
    }
}

impl AsyncDatabaseConfig {
    /// Private in-memory database. Every connection would see its own empty
    /// database, so the pool holds exactly one.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    #[must_use]
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self {
            url: format!("sqlite:{}", path.as_ref().display()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_memory(&self) -> bool {
        self.url.contains(":memory:")
    }

    fn connect_options(&self) -> Result<SqliteConnectOptions, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&self.url)?
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT);

        if self.is_memory() {
            return Ok(options);
        }

        // NORMAL only loses the last commits on power loss once WAL is on
        Ok(options
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal))
    }
}

/// Pooled SQLite handle
#[derive(Debug, Clone)]
pub struct AsyncDatabase {
    pool: SqlitePool,
}

impl AsyncDatabase {
    #[instrument(skip_all, fields(url = %config.url))]
    pub async fn new(config: &AsyncDatabaseConfig) -> Result<Self, AsyncDatabaseError> {
        let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);

        if config.is_memory() {
            // Recycling the only connection would drop the whole database
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(config.connect_options()?)
            .await?;

        info!(
            max_connections = config.max_connections,
            in_memory = config.is_memory(),
            "Database pool created"
        );

        Ok(Self { pool })
    }

    pub async fn in_memory() -> Result<Self, AsyncDatabaseError> {
        Self::new(&AsyncDatabaseConfig::in_memory()).await
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Apply pending migrations. Already applied ones are skipped.
    #[instrument(skip(self))]
    pub async fn migrate(&self) -> Result<(), AsyncDatabaseError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        info!("Database migrations completed");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        debug!("Database pool closed");
    }
}
