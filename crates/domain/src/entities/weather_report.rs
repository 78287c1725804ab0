//! Weather report returned for a city
//!
//! The provider's payload is opaque: any JSON object is accepted and passed
//! through. The only addition is `cityName`, which always wins over a
//! provider field of the same name.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{entities::City, errors::DomainError};

/// Key under which the city name is attached
pub const CITY_NAME_KEY: &str = "cityName";

/// Provider weather fields merged with the city name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeatherReport(Map<String, Value>);

impl WeatherReport {
    /// Parse a raw provider payload and attach the city name
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedWeatherPayload`] when the payload is
    /// blank, is not valid JSON, or is JSON but not an object.
    pub fn merge(payload: &str, city: &City) -> Result<Self, DomainError> {
        if payload.trim().is_empty() {
            return Err(DomainError::MalformedWeatherPayload(
                "empty payload".to_string(),
            ));
        }

        let value: Value = serde_json::from_str(payload)
            .map_err(|e| DomainError::MalformedWeatherPayload(e.to_string()))?;

        let Value::Object(mut fields) = value else {
            return Err(DomainError::MalformedWeatherPayload(format!(
                "expected a JSON object, got {}",
                json_type_name(&value)
            )));
        };

        fields.insert(
            CITY_NAME_KEY.to_string(),
            Value::String(city.name.as_str().to_string()),
        );

        Ok(Self(fields))
    }

    /// Look up a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The attached city name
    pub fn city_name(&self) -> Option<&str> {
        self.0.get(CITY_NAME_KEY).and_then(Value::as_str)
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
