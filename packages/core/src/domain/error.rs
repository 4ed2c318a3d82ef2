//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::{ParkId, TripId, VisitorId};

/// Errors raised while constructing value objects
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Visitor name length outside the allowed range
    #[error("Name length must be between {min} and {max} characters")]
    VisitorNameLength { min: usize, max: usize, actual: usize },

    /// National park name shorter than the minimum
    #[error("Name length must be at least {min} characters")]
    ParkNameTooShort { min: usize, actual: usize },

    /// Trip date not matching `Month Day<suffix>`
    #[error("Invalid date format. Date should be in the format 'Month Dayth'.")]
    InvalidDateFormat { value: String },
}

/// Errors related to repository lookups
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Visitor not found: {0}")]
    VisitorNotFound(VisitorId),

    #[error("National park not found: {0}")]
    ParkNotFound(ParkId),

    #[error("Trip not found: {0}")]
    TripNotFound(TripId),
}
