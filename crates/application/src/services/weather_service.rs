//! Weather service
//!
//! Resolves a city by identifier, fetches its weather from the provider and
//! attaches the city name to the result.

use std::{fmt, sync::Arc};

use domain::WeatherReport;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{CityStore, WeatherProvider},
    validation::validate_city_id,
};

/// Service for per-city weather lookups
pub struct WeatherService {
    store: Arc<dyn CityStore>,
    provider: Arc<dyn WeatherProvider>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(store: Arc<dyn CityStore>, provider: Arc<dyn WeatherProvider>) -> Self {
        Self { store, provider }
    }

    /// Get the weather for the city identified by `raw_id`
    ///
    /// The provider is called once, without retry.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::Domain`] when `raw_id` is not an integer
    /// - [`ApplicationError::StoreRead`] when the lookup fails
    /// - [`ApplicationError::CityNotFound`] when no city has this id
    /// - [`ApplicationError::WeatherUnavailable`] when the provider fails or
    ///   returns an empty or unparseable payload
    #[instrument(skip(self))]
    pub async fn get_weather(&self, raw_id: &str) -> Result<WeatherReport, ApplicationError> {
        let id = validate_city_id(raw_id)?;

        let city = self
            .store
            .find_by_id(id)
            .await
            .map_err(|e| {
                warn!(error = %e, "City lookup failed");
                ApplicationError::StoreRead(e.to_string())
            })?
            .ok_or(ApplicationError::CityNotFound(id))?;

        debug!(city_id = %city.id, "Fetching weather");

        let payload = self
            .provider
            .fetch_weather(&city.name)
            .await
            .map_err(|e| {
                warn!(error = %e, "Weather provider call failed");
                ApplicationError::WeatherUnavailable(e.to_string())
            })?
            .ok_or_else(|| {
                warn!("Weather provider returned no body");
                ApplicationError::WeatherUnavailable("no payload".to_string())
            })?;

        let report = WeatherReport::merge(&payload, &city).map_err(|e| {
            warn!(error = %e, "Weather payload rejected");
            ApplicationError::WeatherUnavailable(e.to_string())
        })?;

        info!(city_id = %city.id, "Weather retrieved");
        Ok(report)
    }
}
