//! SQLite city store using sqlx

use application::{error::ApplicationError, ports::CityStore};
use async_trait::async_trait;
use domain::{City, CityId, CityName};
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use super::error::map_sqlx_error;

/// City store backed by the `cities` table
///
/// Name uniqueness is enforced by the table's `UNIQUE` constraint, so a
/// racing duplicate insert fails instead of creating a second row.
#[derive(Debug, Clone)]
pub struct SqliteCityStore {
    pool: SqlitePool,
}

impl SqliteCityStore {
    /// Create a new city store
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn to_city((id, name): (i64, String)) -> Result<City, ApplicationError> {
        let name = CityName::new(name)
            .map_err(|e| ApplicationError::Internal(format!("Stored city {id} is invalid: {e}")))?;
        Ok(City::new(CityId::new(id), name))
    }
}

#[async_trait]
impl CityStore for SqliteCityStore {
    #[instrument(skip(self), fields(name = %name))]
    async fn find_by_name(&self, name: &CityName) -> Result<Option<City>, ApplicationError> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM cities WHERE name = $1")
                .bind(name.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        debug!(found = row.is_some(), "Looked up city by name");
        row.map(Self::to_city).transpose()
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn find_by_id(&self, id: CityId) -> Result<Option<City>, ApplicationError> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM cities WHERE id = $1")
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        debug!(found = row.is_some(), "Looked up city by id");
        row.map(Self::to_city).transpose()
    }

    #[instrument(skip(self), fields(name = %name))]
    async fn create(&self, name: &CityName) -> Result<City, ApplicationError> {
        let row: (i64, String) =
            sqlx::query_as("INSERT INTO cities (name) VALUES ($1) RETURNING id, name")
                .bind(name.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        debug!(id = row.0, "City inserted");
        Self::to_city(row)
    }
}
