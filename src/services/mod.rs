//! Services coordinating list pages, deletions and exports.

use thiserror::Error;

use crate::export::ExportError;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod deletion;
pub mod export;
pub mod list;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error("invalid value: {0}")]
    TypeConstraint(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),

    #[error("export error: {0}")]
    Export(#[from] ExportError),

    #[error("deletion must be confirmed")]
    ConfirmationRequired,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
