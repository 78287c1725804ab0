//! City store port
//!
//! Defines the interface for durable city records.

use async_trait::async_trait;
use domain::{City, CityId, CityName};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for city persistence
///
/// Implementations must enforce name uniqueness atomically: when two
/// concurrent `create` calls race on the same name, exactly one succeeds and
/// the other returns an error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CityStore: Send + Sync {
    /// Find a city by its exact (case-sensitive) name
    async fn find_by_name(&self, name: &CityName) -> Result<Option<City>, ApplicationError>;

    /// Find a city by identifier
    async fn find_by_id(&self, id: CityId) -> Result<Option<City>, ApplicationError>;

    /// Insert a new city and return it with its assigned identifier
    async fn create(&self, name: &CityName) -> Result<City, ApplicationError>;
}
