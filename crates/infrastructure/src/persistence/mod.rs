//! Persistence module
//!
//! SQLite storage for cities via sqlx.

mod async_connection;
mod city_store;
mod database_health;
mod error;

pub use async_connection::{AsyncDatabase, AsyncDatabaseConfig, AsyncDatabaseError};
pub use city_store::SqliteCityStore;
pub use database_health::SqliteDatabaseHealth;
pub use error::map_sqlx_error;
