//! Health aggregation service
//!
//! Readiness checks for the dependencies the service cannot run without,
//! each bounded by a timeout.

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::ports::DatabaseHealthPort;

/// Default timeout for a single health check in seconds
const DEFAULT_HEALTH_CHECK_TIMEOUT_SECS: u64 = 5;

/// Status of an individual dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Whether the dependency is healthy
    pub healthy: bool,
    /// Optional additional information (e.g. version)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Response time in milliseconds (if check was performed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    /// Error message if unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceHealth {
    /// Create a healthy status
    #[must_use]
    pub const fn healthy() -> Self {
        Self {
            healthy: true,
            info: None,
            response_time_ms: None,
            error: None,
        }
    }

    /// Create an unhealthy status
    #[must_use]
    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            healthy: false,
            info: None,
            response_time_ms: None,
            error: Some(error.into()),
        }
    }

    /// Create an unhealthy status due to timeout
    #[must_use]
    pub fn timeout() -> Self {
        Self::unhealthy("Health check timed out")
    }

    /// Attach additional information
    #[must_use]
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    /// Add response time to the status
    #[must_use]
    pub const fn with_response_time(mut self, ms: u64) -> Self {
        self.response_time_ms = Some(ms);
        self
    }
}

/// Aggregated readiness report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// True when every checked dependency is healthy
    pub healthy: bool,
    /// Per-dependency status, keyed by name
    pub services: BTreeMap<String, ServiceHealth>,
}

impl HealthReport {
    /// Build a report from individual statuses
    #[must_use]
    pub fn new(services: BTreeMap<String, ServiceHealth>) -> Self {
        let healthy = services.values().all(|s| s.healthy);
        Self { healthy, services }
    }

    /// Get status of a specific dependency
    #[must_use]
    pub fn service_status(&self, name: &str) -> Option<&ServiceHealth> {
        self.services.get(name)
    }
}

/// Service for readiness checks
pub struct HealthService {
    database: Arc<dyn DatabaseHealthPort>,
    check_timeout: Duration,
}

impl std::fmt::Debug for HealthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthService")
            .field("database", &"<DatabaseHealthPort>")
            .field("check_timeout", &self.check_timeout)
            .finish()
    }
}

impl HealthService {
    /// Create a new health service
    #[must_use]
    pub fn new(database: Arc<dyn DatabaseHealthPort>) -> Self {
        Self {
            database,
            check_timeout: Duration::from_secs(DEFAULT_HEALTH_CHECK_TIMEOUT_SECS),
        }
    }

    /// Override the per-check timeout
    #[must_use]
    pub const fn with_timeout(mut self, check_timeout: Duration) -> Self {
        self.check_timeout = check_timeout;
        self
    }

    /// Check all dependencies
    #[instrument(skip(self))]
    pub async fn check_all(&self) -> HealthReport {
        let mut services = BTreeMap::new();
        services.insert("database".to_string(), self.check_database().await);
        HealthReport::new(services)
    }

    /// Check the database
    #[instrument(skip(self))]
    pub async fn check_database(&self) -> ServiceHealth {
        let start = std::time::Instant::now();

        let Ok(result) = timeout(self.check_timeout, self.database.check_health()).await else {
            warn!("Database health check timed out");
            return ServiceHealth::timeout();
        };

        // Health checks are bounded by a timeout of seconds.
        #[allow(clippy::cast_possible_truncation)]
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(health) if health.reachable => {
                debug!(elapsed_ms, "Database healthy");
                let status = ServiceHealth::healthy().with_response_time(elapsed_ms);
                match health.version {
                    Some(version) => status.with_info(version),
                    None => status,
                }
            },
            Ok(_) => ServiceHealth::unhealthy("Database unreachable").with_response_time(elapsed_ms),
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                ServiceHealth::unhealthy("Database check failed").with_response_time(elapsed_ms)
            },
        }
    }
}
