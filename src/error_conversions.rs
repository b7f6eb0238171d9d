//! Error conversion glue between layers.
//!
//! The repository layer must not depend on AI error types, so the
//! conversions live here.

use crate::ai::AiServiceError;
use crate::repository::errors::RepositoryError;

impl From<RepositoryError> for AiServiceError {
    fn from(val: RepositoryError) -> Self {
        AiServiceError::Context(val.to_string())
    }
}
