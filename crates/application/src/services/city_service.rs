//! City service
//!
//! Validates and deduplicates city creation requests against the store.

use std::{fmt, sync::Arc};

use domain::City;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::CityStore,
    validation::{CreateCityInput, validate_city_name},
};

/// Service for creating cities
pub struct CityService {
    store: Arc<dyn CityStore>,
}

impl fmt::Debug for CityService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CityService").finish_non_exhaustive()
    }
}

impl CityService {
    /// Create a new city service
    pub fn new(store: Arc<dyn CityStore>) -> Self {
        Self { store }
    }

    /// Create a city from a raw request
    ///
    /// The duplicate check is a best-effort read before the insert. Two
    /// concurrent requests for the same name can both pass it; the store's
    /// unique constraint then rejects the second insert, which surfaces as
    /// [`ApplicationError::StoreWrite`].
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::Domain`] when the input fails validation
    /// - [`ApplicationError::StoreRead`] when the duplicate check fails
    /// - [`ApplicationError::DuplicateCity`] when the name is taken
    /// - [`ApplicationError::StoreWrite`] when the insert fails
    #[instrument(skip(self, input))]
    pub async fn create_city(&self, input: &CreateCityInput) -> Result<City, ApplicationError> {
        let name = validate_city_name(input)?;

        let existing = self.store.find_by_name(&name).await.map_err(|e| {
            warn!(error = %e, "Duplicate check failed");
            ApplicationError::StoreRead(e.to_string())
        })?;

        if let Some(city) = existing {
            debug!(city_id = %city.id, "City name already taken");
            return Err(ApplicationError::DuplicateCity(name.into_inner()));
        }

        let city = self.store.create(&name).await.map_err(|e| {
            warn!(error = %e, "City insert failed");
            ApplicationError::StoreWrite(e.to_string())
        })?;

        info!(city_id = %city.id, "City created");
        Ok(city)
    }
}

#[cfg(test)]
mod tests {
    use domain::{CityId, CityName, DomainError, ErrorKind};
    use mockall::predicate::always;

    use super::*;
    use crate::ports::MockCityStore;

    fn city(id: i64, name: &str) -> City {
        City::new(CityId::new(id), CityName::new(name).unwrap())
    }

    #[tokio::test]
    async fn creates_new_city() {
        let mut store = MockCityStore::new();
        store
            .expect_find_by_name()
            .withf(|name| name.as_str() == "New York")
            .times(1)
            .returning(|_| Ok(None));
        store
            .expect_create()
            .withf(|name| name.as_str() == "New York")
            .times(1)
            .returning(|name| Ok(City::new(CityId::new(1), name.clone())));

        let service = CityService::new(Arc::new(store));
        let created = service
            .create_city(&CreateCityInput::with_name("New York"))
            .await
            .unwrap();

        assert_eq!(created, city(1, "New York"));
    }

    #[tokio::test]
    async fn missing_name_never_touches_store() {
        let mut store = MockCityStore::new();
        store.expect_find_by_name().never();
        store.expect_create().never();

        let service = CityService::new(Arc::new(store));
        let err = service
            .create_city(&CreateCityInput::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::MissingField("name"))
        ));
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let mut store = MockCityStore::new();
        store.expect_find_by_name().never();

        let service = CityService::new(Arc::new(store));
        let err = service
            .create_city(&CreateCityInput::with_name(""))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::EmptyCityName)
        ));
    }

    #[tokio::test]
    async fn long_name_is_rejected() {
        let mut store = MockCityStore::new();
        store.expect_find_by_name().never();

        let service = CityService::new(Arc::new(store));
        let err = service
            .create_city(&CreateCityInput::with_name("a".repeat(256)))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected_before_insert() {
        let mut store = MockCityStore::new();
        store
            .expect_find_by_name()
            .returning(|_| Ok(Some(city(4, "Miami"))));
        store.expect_create().never();

        let service = CityService::new(Arc::new(store));
        let err = service
            .create_city(&CreateCityInput::with_name("Miami"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::DuplicateCity(ref n) if n == "Miami"));
    }

    #[tokio::test]
    async fn read_failure_is_store_read() {
        let mut store = MockCityStore::new();
        store
            .expect_find_by_name()
            .returning(|_| Err(ApplicationError::Internal("database is locked".into())));
        store.expect_create().never();

        let service = CityService::new(Arc::new(store));
        let err = service
            .create_city(&CreateCityInput::with_name("Paris"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::StoreRead(_)));
    }

    #[tokio::test]
    async fn write_failure_is_store_write() {
        let mut store = MockCityStore::new();
        store.expect_find_by_name().returning(|_| Ok(None));
        store
            .expect_create()
            .with(always())
            .returning(|_| Err(ApplicationError::Internal("UNIQUE constraint failed".into())));

        let service = CityService::new(Arc::new(store));
        let err = service
            .create_city(&CreateCityInput::with_name("Paris"))
            .await
            .unwrap_err();

        let ApplicationError::StoreWrite(detail) = err else {
            unreachable!("Expected StoreWrite, got {err:?}");
        };
        assert!(detail.contains("UNIQUE"));
    }

    #[test]
    fn debug_hides_store() {
        let service = CityService::new(Arc::new(MockCityStore::new()));
        assert!(format!("{service:?}").contains("CityService"));
    }
}
