//! Input validation for inbound requests
//!
//! Pure checks with no I/O. Transport adapters build a [`CreateCityInput`]
//! from whatever they received; everything past this module works with
//! validated domain types only.

use domain::{CityId, CityName, DomainError};
use serde::Deserialize;

/// Raw create-city request as received from a client
///
/// `name` is optional so an absent key can be told apart from an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateCityInput {
    /// Requested city name
    #[serde(default)]
    pub name: Option<String>,
}

impl CreateCityInput {
    /// Input with a name set
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Validate the name of a create-city request
///
/// # Errors
///
/// - [`DomainError::MissingField`] when `name` is absent
/// - [`DomainError::EmptyCityName`] when it is `""`
/// - [`DomainError::CityNameTooLong`] past 255 characters
pub fn validate_city_name(input: &CreateCityInput) -> Result<CityName, DomainError> {
    let name = input
        .name
        .as_deref()
        .ok_or(DomainError::MissingField("name"))?;
    CityName::new(name)
}

/// Validate a raw city identifier taken from a request path
///
/// # Errors
///
/// Returns [`DomainError::InvalidCityId`] when the input has no leading
/// integer.
pub fn validate_city_id(raw: &str) -> Result<CityId, DomainError> {
    CityId::parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_name_is_missing_field() {
        let input = CreateCityInput::default();
        assert_eq!(
            validate_city_name(&input),
            Err(DomainError::MissingField("name"))
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        let input = CreateCityInput::with_name("");
        assert_eq!(validate_city_name(&input), Err(DomainError::EmptyCityName));
    }

    #[test]
    fn long_name_is_rejected() {
        let input = CreateCityInput::with_name("a".repeat(256));
        assert!(matches!(
            validate_city_name(&input),
            Err(DomainError::CityNameTooLong { actual: 256, .. })
        ));
    }

    #[test]
    fn valid_name_passes_through_unchanged() {
        let input = CreateCityInput::with_name("New York");
        assert_eq!(validate_city_name(&input).unwrap().as_str(), "New York");
    }

    #[test]
    fn input_deserializes_without_name() {
        let input: CreateCityInput = serde_json::from_str(r#"{"population": 5}"#).unwrap();
        assert_eq!(input.name, None);
    }

    #[test]
    fn null_name_counts_as_absent() {
        let input: CreateCityInput = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(
            validate_city_name(&input),
            Err(DomainError::MissingField("name"))
        );
    }

    #[test]
    fn city_id_validation() {
        assert_eq!(validate_city_id("7").unwrap(), CityId::new(7));
        assert!(validate_city_id("invalid-id").is_err());
        assert!(validate_city_id("").is_err());
    }
}
