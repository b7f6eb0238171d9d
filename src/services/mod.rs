use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod ai;
pub mod sales_reps;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to load sales data: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
