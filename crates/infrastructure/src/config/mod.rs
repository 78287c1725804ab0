//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server and logging settings
//! - `database`: SQLite database settings
//!
//! Weather provider settings reuse [`WeatherConfig`] from the integration
//! crate.
//!
//! Sources are layered: built-in defaults, then an optional `config.toml`
//! in the working directory, then environment variables prefixed with
//! `CITYWEATHER_` using `__` between nesting levels
//! (e.g. `CITYWEATHER_SERVER__PORT=8080`).

mod database;
mod server;

use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, builder::DefaultState};
pub use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use server::{LogFormat, ServerConfig};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CITYWEATHER";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl AppConfig {
    /// Load configuration from defaults, `config.toml` and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Parse configuration from a TOML document layered over the defaults
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("weather.base_url", "https://api.weather.com")
    }
}
