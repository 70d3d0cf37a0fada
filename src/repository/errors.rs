use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Errors surfaced by the category store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row matched the requested identifier.
    #[error("category not found")]
    NotFound,
    /// A row with the same identifier already exists.
    #[error("category id already exists: {0}")]
    DuplicateId(String),
    /// The database could not be opened or the statement failed.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    /// A stored row violates a domain constraint.
    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                RepositoryError::DuplicateId(info.message().to_string())
            }
            other => RepositoryError::StorageUnavailable(other.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for RepositoryError {
    fn from(value: diesel::ConnectionError) -> Self {
        RepositoryError::StorageUnavailable(value.to_string())
    }
}
