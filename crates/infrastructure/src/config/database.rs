//! Database (SQLite) configuration.

use serde::{Deserialize, Serialize};

use crate::persistence::AsyncDatabaseConfig;

/// SQLite database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL (e.g. `sqlite:cityweather.db`, `sqlite::memory:`)
    #[serde(default = "default_db_url")]
    pub url: String,

    /// Maximum number of concurrent database connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Whether to run pending migrations on startup (default: true)
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

fn default_db_url() -> String {
    "sqlite:cityweather.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

const fn default_true() -> bool {
    true
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_db_url(),
            max_connections: default_max_connections(),
            run_migrations: true,
        }
    }
}

impl From<&DatabaseConfig> for AsyncDatabaseConfig {
    fn from(config: &DatabaseConfig) -> Self {
        let target = Self {
            url: config.url.clone(),
            max_connections: config.max_connections,
        };
        if target.is_memory() {
            return Self {
                url: target.url,
                ..Self::in_memory()
            };
        }
        target
    }
}
