//! Weather adapter - Implements `WeatherProvider` using integration_weather

use std::sync::Arc;

use application::{error::ApplicationError, ports::WeatherProvider};
use async_trait::async_trait;
use domain::CityName;
use integration_weather::{HttpWeatherClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Weather provider backed by a [`WeatherClient`]
pub struct HttpWeatherProvider {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for HttpWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpWeatherProvider")
            .field("client", &"<WeatherClient>")
            .finish()
    }
}

impl HttpWeatherProvider {
    /// Create an adapter over the reqwest client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = HttpWeatherClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter over any client implementation
    #[must_use]
    pub fn with_client(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Convert integration errors to application errors
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::RateLimitExceeded => {
                ApplicationError::ExternalService("Weather provider rate limit exceeded".into())
            },
            WeatherError::ConnectionFailed(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl WeatherProvider for HttpWeatherProvider {
    #[instrument(skip(self), fields(city = %city))]
    async fn fetch_weather(&self, city: &CityName) -> Result<Option<String>, ApplicationError> {
        let result = self
            .client
            .fetch_raw(city.as_str())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(body) => debug!(has_body = body.is_some(), "Weather provider responded"),
            Err(e) => debug!(error = %e, "Weather provider failed"),
        }

        result
    }
}
