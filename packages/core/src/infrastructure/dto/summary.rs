//! Summary DTOs for presenting visitors and national parks.

use serde::{Deserialize, Serialize};

use crate::{
    domain::{ParkId, RepositoryError, VisitorId},
    usecase::TravelQueryUseCase,
};

/// Visitor summary: trips by start date and distinct parks visited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorSummaryDto {
    pub name: String,
    pub trips: Vec<String>, // start dates
    pub national_parks: Vec<String>,
}

/// National park summary with its aggregate figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkSummaryDto {
    pub name: String,
    pub trips: Vec<String>, // start dates
    pub visitors: Vec<String>,
    pub total_visits: usize,
    pub best_visitor: Option<String>,
}

impl VisitorSummaryDto {
    /// Build the summary of a visitor
    pub fn build(query: &TravelQueryUseCase<'_>, id: VisitorId) -> Result<Self, RepositoryError> {
        let trips = query.visitor_trips(id)?;
        let name = query
            .repository()
            .visitor(id)?
            .name()
            .as_str()
            .to_string();

        Ok(Self {
            name,
            trips: trips
                .iter()
                .map(|trip| trip.start_date().as_str().to_string())
                .collect(),
            national_parks: query
                .visitor_national_parks(id)?
                .iter()
                .map(|park| park.name().as_str().to_string())
                .collect(),
        })
    }
}

impl ParkSummaryDto {
    /// Build the summary of a national park
    pub fn build(query: &TravelQueryUseCase<'_>, id: ParkId) -> Result<Self, RepositoryError> {
        let park = query.repository().park(id)?;

        Ok(Self {
            name: park.name().as_str().to_string(),
            trips: query
                .park_trips(id)?
                .iter()
                .map(|trip| trip.start_date().as_str().to_string())
                .collect(),
            visitors: query
                .park_visitors(id)?
                .iter()
                .map(|visitor| visitor.name().as_str().to_string())
                .collect(),
            total_visits: query.total_visits(id)?,
            best_visitor: query
                .best_visitor(id)?
                .map(|visitor| visitor.name().as_str().to_string()),
        })
    }
}
