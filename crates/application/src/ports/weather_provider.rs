//! Weather provider port
//!
//! Defines the interface for the external weather lookup.

use async_trait::async_trait;
use domain::CityName;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching raw weather data by city name
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the raw weather document for a city
    ///
    /// Returns `Ok(None)` when the provider answered without a body.
    /// The payload is returned unparsed.
    async fn fetch_weather(&self, city: &CityName) -> Result<Option<String>, ApplicationError>;
}
