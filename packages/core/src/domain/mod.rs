//! Domain layer for the travel registry.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{NationalPark, Trip, Visitor};
pub use error::{RepositoryError, ValidationError};
pub use repository::TravelRepository;
pub use value_object::{ParkId, ParkName, TripDate, TripId, VisitorId, VisitorName};
