//! InMemory Travel Repository 実装
//!
//! ドメイン層が定義する TravelRepository trait の具体的な実装。
//! Vec をアリーナとして使用し、キーはインデックスそのものです。

use crate::domain::{
    NationalPark, ParkId, ParkName, RepositoryError, TravelRepository, Trip, TripDate, TripId,
    Visitor, VisitorId, VisitorName,
};

/// インメモリ Travel Repository 実装
///
/// 訪問者・国立公園・旅行をそれぞれ作成順の Vec で保持します。
/// 削除操作は無いため、キーは常に有効なインデックスです（`reset` まで）。
#[derive(Debug, Default)]
pub struct InMemoryTravelRepository {
    visitors: Vec<Visitor>,
    parks: Vec<NationalPark>,
    trips: Vec<Trip>,
}

impl InMemoryTravelRepository {
    /// 新しい空の InMemoryTravelRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

impl TravelRepository for InMemoryTravelRepository {
    fn add_visitor(&mut self, name: VisitorName) -> VisitorId {
        let id = VisitorId::new(self.visitors.len());
        tracing::debug!(%id, name = %name, "registered visitor");
        self.visitors.push(Visitor::new(id, name));
        id
    }

    fn add_park(&mut self, name: ParkName) -> ParkId {
        let id = ParkId::new(self.parks.len());
        tracing::debug!(%id, name = %name, "registered national park");
        self.parks.push(NationalPark::new(id, name));
        id
    }

    fn add_trip(
        &mut self,
        visitor: VisitorId,
        national_park: ParkId,
        start_date: TripDate,
        end_date: TripDate,
    ) -> Result<TripId, RepositoryError> {
        // 両端の存在を確認してから変更する
        if visitor.value() >= self.visitors.len() {
            return Err(RepositoryError::VisitorNotFound(visitor));
        }
        if national_park.value() >= self.parks.len() {
            return Err(RepositoryError::ParkNotFound(national_park));
        }

        let id = TripId::new(self.trips.len());
        tracing::debug!(
            %id,
            %visitor,
            %national_park,
            start_date = %start_date,
            end_date = %end_date,
            "recorded trip"
        );
        self.trips
            .push(Trip::new(id, visitor, national_park, start_date, end_date));
        self.visitors[visitor.value()].add_trip(id);
        self.parks[national_park.value()].add_trip(id);
        Ok(id)
    }

    fn visitor(&self, id: VisitorId) -> Result<&Visitor, RepositoryError> {
        self.visitors
            .get(id.value())
            .ok_or(RepositoryError::VisitorNotFound(id))
    }

    fn park(&self, id: ParkId) -> Result<&NationalPark, RepositoryError> {
        self.parks
            .get(id.value())
            .ok_or(RepositoryError::ParkNotFound(id))
    }

    fn trip(&self, id: TripId) -> Result<&Trip, RepositoryError> {
        self.trips
            .get(id.value())
            .ok_or(RepositoryError::TripNotFound(id))
    }

    fn parks(&self) -> &[NationalPark] {
        &self.parks
    }

    fn visitor_count(&self) -> usize {
        self.visitors.len()
    }

    fn park_count(&self) -> usize {
        self.parks.len()
    }

    fn trip_count(&self) -> usize {
        self.trips.len()
    }

    fn reset(&mut self) {
        tracing::debug!(
            visitors = self.visitors.len(),
            parks = self.parks.len(),
            trips = self.trips.len(),
            "reset travel repository"
        );
        self.visitors.clear();
        self.parks.clear();
        self.trips.clear();
    }
}
