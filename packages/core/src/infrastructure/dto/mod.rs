//! Data transfer objects.

pub mod summary;

pub use summary::{ParkSummaryDto, VisitorSummaryDto};
