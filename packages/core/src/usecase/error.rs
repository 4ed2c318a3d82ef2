//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{RepositoryError, ValidationError};

/// Errors returned by `RecordTripUseCase`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordTripError {
    /// A date failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An endpoint does not exist
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
