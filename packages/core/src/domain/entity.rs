//! Core domain models: visitors, national parks and the trips joining them.
//!
//! Entities never hold each other directly. A [`Trip`] refers to its
//! endpoints by key, and each endpoint keeps the keys of its trips in
//! creation order.

use serde::Serialize;

use super::value_object::{ParkId, ParkName, TripDate, TripId, VisitorId, VisitorName};

/// Represents a visitor and the trips they have taken
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visitor {
    id: VisitorId,
    name: VisitorName,
    trips: Vec<TripId>,
}

impl Visitor {
    /// Create a new visitor with no trips
    pub fn new(id: VisitorId, name: VisitorName) -> Self {
        Self {
            id,
            name,
            trips: Vec::new(),
        }
    }

    pub fn id(&self) -> VisitorId {
        self.id
    }

    pub fn name(&self) -> &VisitorName {
        &self.name
    }

    /// Trips taken by this visitor, in creation order
    pub fn trips(&self) -> &[TripId] {
        &self.trips
    }

    /// Append a trip.
    ///
    /// The caller is responsible for the trip actually referencing this visitor.
    pub fn add_trip(&mut self, trip: TripId) {
        self.trips.push(trip);
    }
}

/// Represents a national park and the trips it has received
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NationalPark {
    id: ParkId,
    name: ParkName,
    trips: Vec<TripId>,
}

impl NationalPark {
    /// Create a new national park with no trips
    pub fn new(id: ParkId, name: ParkName) -> Self {
        Self {
            id,
            name,
            trips: Vec::new(),
        }
    }

    pub fn id(&self) -> ParkId {
        self.id
    }

    pub fn name(&self) -> &ParkName {
        &self.name
    }

    /// Trips received by this park, in creation order
    pub fn trips(&self) -> &[TripId] {
        &self.trips
    }

    /// Append a trip.
    ///
    /// The caller is responsible for the trip actually referencing this park.
    pub fn add_trip(&mut self, trip: TripId) {
        self.trips.push(trip);
    }

    /// Number of trips received
    pub fn total_visits(&self) -> usize {
        self.trips.len()
    }
}

/// A visit of one visitor to one national park
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trip {
    id: TripId,
    visitor: VisitorId,
    national_park: ParkId,
    start_date: TripDate,
    end_date: TripDate,
}

impl Trip {
    /// Create a new trip record.
    ///
    /// This does not register the trip with its endpoints; use
    /// `TravelRepository::add_trip` for that.
    pub fn new(
        id: TripId,
        visitor: VisitorId,
        national_park: ParkId,
        start_date: TripDate,
        end_date: TripDate,
    ) -> Self {
        Self {
            id,
            visitor,
            national_park,
            start_date,
            end_date,
        }
    }

    pub fn id(&self) -> TripId {
        self.id
    }

    pub fn visitor(&self) -> VisitorId {
        self.visitor
    }

    pub fn national_park(&self) -> ParkId {
        self.national_park
    }

    pub fn start_date(&self) -> &TripDate {
        &self.start_date
    }

    pub fn end_date(&self) -> &TripDate {
        &self.end_date
    }
}
