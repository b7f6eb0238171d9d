use std::io;

use thiserror::Error;

/// Failure to produce the record collection. Loading is all-or-nothing, so
/// any of these aborts the request that triggered it.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Data source not found: {0}")]
    NotFound(String),

    #[error("Data source unreadable: {0}")]
    Io(String),

    #[error("Malformed data source: {0}")]
    Malformed(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<io::Error> for RepositoryError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => RepositoryError::NotFound(err.to_string()),
            _ => RepositoryError::Io(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Malformed(err.to_string())
    }
}
