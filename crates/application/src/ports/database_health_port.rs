//! Database health check port
//!
//! Defines the interface for database connectivity checks.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Database health information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseHealth {
    /// Whether the database is reachable and responding
    pub reachable: bool,
    /// Database version or identifier (if available)
    pub version: Option<String>,
}

impl DatabaseHealth {
    /// Create a healthy database status
    #[must_use]
    pub const fn healthy() -> Self {
        Self {
            reachable: true,
            version: None,
        }
    }

    /// Create a healthy status with version info
    #[must_use]
    pub fn healthy_with_version(version: impl Into<String>) -> Self {
        Self {
            reachable: true,
            version: Some(version.into()),
        }
    }
}

/// Port for database health checks
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DatabaseHealthPort: Send + Sync {
    /// Run a query against the store; an error means it is unreachable
    async fn check_health(&self) -> Result<DatabaseHealth, ApplicationError>;
}
