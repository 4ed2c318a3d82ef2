//! Repository trait for the travel registry.
//!
//! The domain layer defines the interface; `infrastructure` provides the
//! implementation (dependency inversion).

use super::{
    entity::{NationalPark, Trip, Visitor},
    error::RepositoryError,
    value_object::{ParkId, ParkName, TripDate, TripId, VisitorId, VisitorName},
};

/// Registry of visitors, national parks and trips.
///
/// Keys are assigned in creation order and are only meaningful for the
/// repository that issued them.
pub trait TravelRepository {
    /// Register a visitor and return its key
    fn add_visitor(&mut self, name: VisitorName) -> VisitorId;

    /// Register a national park and return its key
    fn add_park(&mut self, name: ParkName) -> ParkId;

    /// Store a trip and append it to both endpoints.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::VisitorNotFound` or `RepositoryError::ParkNotFound`
    /// if an endpoint is unknown. Nothing is modified in that case.
    fn add_trip(
        &mut self,
        visitor: VisitorId,
        national_park: ParkId,
        start_date: TripDate,
        end_date: TripDate,
    ) -> Result<TripId, RepositoryError>;

    fn visitor(&self, id: VisitorId) -> Result<&Visitor, RepositoryError>;

    fn park(&self, id: ParkId) -> Result<&NationalPark, RepositoryError>;

    fn trip(&self, id: TripId) -> Result<&Trip, RepositoryError>;

    /// All registered parks, in creation order
    fn parks(&self) -> &[NationalPark];

    fn visitor_count(&self) -> usize;

    fn park_count(&self) -> usize;

    fn trip_count(&self) -> usize;

    /// Drop every visitor, park and trip and restart key allocation
    fn reset(&mut self);
}
