use std::time::Duration;

/// Errors raised by the PostgreSQL layer
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Errors reported by SeaORM / sqlx
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// A statement did not complete within its deadline
    #[error("Query '{operation}' timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

impl DatabaseError {
    /// Whether the error means the addressed row does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DatabaseError::Postgres(sea_orm::DbErr::RecordNotFound(_))
                | DatabaseError::Postgres(sea_orm::DbErr::RecordNotUpdated)
        )
    }
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
