//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: SQLite persistence,
//! the HTTP weather provider, configuration loading and logging.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, DatabaseConfig, LogFormat, ServerConfig, WeatherConfig};
pub use persistence::{
    AsyncDatabase, AsyncDatabaseConfig, AsyncDatabaseError, SqliteCityStore, SqliteDatabaseHealth,
};
pub use telemetry::{TelemetryError, init_logging};
