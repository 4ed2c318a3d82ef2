//! The fixed demonstration scenario.

use serde::Serialize;
use thiserror::Error;

use parkways_core::{
    domain::{RepositoryError, ValidationError},
    infrastructure::{
        dto::{ParkSummaryDto, VisitorSummaryDto},
        repository::InMemoryTravelRepository,
    },
    usecase::{
        RecordTripError, RecordTripUseCase, RegisterParkUseCase, RegisterVisitorUseCase,
        TravelQueryUseCase,
    },
};

/// Any domain error raised while running the scenario
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DemoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    RecordTrip(#[from] RecordTripError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Everything the demonstration reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub visitor: VisitorSummaryDto,
    pub park: ParkSummaryDto,
    pub most_visited_park: Option<String>,
}

/// Build the scenario in a fresh registry and collect the report.
pub fn run_demo() -> Result<DemoReport, DemoError> {
    let mut repo = InMemoryTravelRepository::new();

    let john = RegisterVisitorUseCase::new(&mut repo).execute("John")?;
    let alice = RegisterVisitorUseCase::new(&mut repo).execute("Alice")?;
    let yellowstone = RegisterParkUseCase::new(&mut repo).execute("Yellowstone")?;
    let yosemite = RegisterParkUseCase::new(&mut repo).execute("Yosemite")?;

    let mut record = RecordTripUseCase::new(&mut repo);
    record.execute(john, yellowstone, "May 5th", "May 6th")?;
    record.execute(john, yosemite, "May 7th", "May 8th")?;
    record.execute(alice, yellowstone, "May 9th", "May 10th")?;
    tracing::info!("demonstration scenario recorded");

    let query = TravelQueryUseCase::new(&repo);
    Ok(DemoReport {
        visitor: VisitorSummaryDto::build(&query, john)?,
        park: ParkSummaryDto::build(&query, yellowstone)?,
        most_visited_park: query
            .most_visited()
            .map(|park| park.name().as_str().to_string()),
    })
}
