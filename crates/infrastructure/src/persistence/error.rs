//! Shared error mapping for sqlx persistence layer

use application::error::ApplicationError;

/// Map a sqlx error to an application-layer error
///
/// Unique violations keep a distinct message so a lost insert race is
/// recognizable in logs.
pub fn map_sqlx_error(e: sqlx::Error) -> ApplicationError {
    match e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            ApplicationError::Internal(format!("Unique constraint violated: {db_err}"))
        },
        sqlx::Error::Database(db_err) => {
            ApplicationError::Internal(format!("Database error: {db_err}"))
        },
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            ApplicationError::Internal(format!("Database unavailable: {e}"))
        },
        other => ApplicationError::Internal(format!("Database error: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_closed_is_unavailable() {
        let err = map_sqlx_error(sqlx::Error::PoolClosed);
        assert!(err.to_string().contains("Database unavailable"));
    }

    #[test]
    fn row_not_found_is_internal() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, ApplicationError::Internal(_)));
    }
}
