//! Port definitions (interfaces for adapters)
//!
//! Ports define the contracts between the application and external systems.
//! Services receive them as `Arc<dyn Port>` at construction time.

mod city_store;
mod database_health_port;
mod weather_provider;

#[cfg(test)]
pub use city_store::MockCityStore;
pub use city_store::CityStore;
#[cfg(test)]
pub use database_health_port::MockDatabaseHealthPort;
pub use database_health_port::{DatabaseHealth, DatabaseHealthPort};
#[cfg(test)]
pub use weather_provider::MockWeatherProvider;
pub use weather_provider::WeatherProvider;
