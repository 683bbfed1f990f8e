/// Error returned by every [`Storage`](crate::store::Storage) backend.
///
/// Raw `sqlx` errors are classified on conversion so callers can map them to
/// responses without inspecting driver-specific codes.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A row with the same primary key already exists.
    #[error("Duplicate key: {0}")]
    Duplicate(String),

    /// No pooled connection became free within the acquire timeout.
    #[error("Timed out waiting for a database connection")]
    Unavailable,

    /// Any other database or transport failure.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => StoreError::Unavailable,
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                StoreError::Duplicate(constraint)
            }
            other => StoreError::Database(other),
        }
    }
}
