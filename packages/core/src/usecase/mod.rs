//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod error;
pub mod record_trip;
pub mod register_park;
pub mod register_visitor;
pub mod travel_query;

pub use error::RecordTripError;
pub use record_trip::RecordTripUseCase;
pub use register_park::RegisterParkUseCase;
pub use register_visitor::RegisterVisitorUseCase;
pub use travel_query::TravelQueryUseCase;
