//! UseCase: 旅行データの参照処理
//!
//! 全ての集計は呼び出し時に旅行リストから導出します（キャッシュなし）。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - 訪問者・国立公園ごとの旅行一覧と重複排除
//! - best_visitor / most_visited の同数時の決定規則（先に最大値に達したものが勝つ）
//!
//! ### どのような状況を想定しているか
//! - 正常系：複数の訪問者・国立公園にまたがる旅行
//! - エッジケース：旅行のない国立公園、国立公園のないレジストリ

use std::collections::{HashMap, HashSet};

use crate::domain::{
    NationalPark, ParkId, RepositoryError, TravelRepository, Trip, Visitor, VisitorId,
};

/// 旅行データ参照のユースケース
pub struct TravelQueryUseCase<'a> {
    /// Repository（データアクセス層の抽象化）
    repository: &'a dyn TravelRepository,
}

impl<'a> TravelQueryUseCase<'a> {
    /// 新しい TravelQueryUseCase を作成
    pub fn new(repository: &'a dyn TravelRepository) -> Self {
        Self { repository }
    }

    /// The repository this use case reads from
    pub fn repository(&self) -> &'a dyn TravelRepository {
        self.repository
    }

    /// Trips taken by a visitor, in creation order
    pub fn visitor_trips(&self, id: VisitorId) -> Result<Vec<&'a Trip>, RepositoryError> {
        let repository = self.repository;
        repository
            .visitor(id)?
            .trips()
            .iter()
            .map(|trip| repository.trip(*trip))
            .collect()
    }

    /// Distinct parks a visitor has been to, in first-visit order
    pub fn visitor_national_parks(
        &self,
        id: VisitorId,
    ) -> Result<Vec<&'a NationalPark>, RepositoryError> {
        tracing::trace!(%id, "querying national parks of visitor");
        let mut seen = HashSet::new();
        let mut parks = Vec::new();
        for trip in self.visitor_trips(id)? {
            if seen.insert(trip.national_park()) {
                parks.push(self.repository.park(trip.national_park())?);
            }
        }
        Ok(parks)
    }

    /// Trips received by a park, in creation order
    pub fn park_trips(&self, id: ParkId) -> Result<Vec<&'a Trip>, RepositoryError> {
        let repository = self.repository;
        repository
            .park(id)?
            .trips()
            .iter()
            .map(|trip| repository.trip(*trip))
            .collect()
    }

    /// Distinct visitors of a park, in first-visit order
    pub fn park_visitors(&self, id: ParkId) -> Result<Vec<&'a Visitor>, RepositoryError> {
        tracing::trace!(%id, "querying visitors of national park");
        let mut seen = HashSet::new();
        let mut visitors = Vec::new();
        for trip in self.park_trips(id)? {
            if seen.insert(trip.visitor()) {
                visitors.push(self.repository.visitor(trip.visitor())?);
            }
        }
        Ok(visitors)
    }

    /// Number of trips received by a park
    pub fn total_visits(&self, id: ParkId) -> Result<usize, RepositoryError> {
        Ok(self.repository.park(id)?.total_visits())
    }

    /// The visitor with the most trips to a park.
    ///
    /// Counts are gathered in trip order and the first visitor to reach the
    /// maximum wins a tie. Returns `None` for a park with no trips.
    pub fn best_visitor(&self, id: ParkId) -> Result<Option<&'a Visitor>, RepositoryError> {
        tracing::trace!(%id, "querying best visitor of national park");
        let mut order: Vec<VisitorId> = Vec::new();
        let mut counts: HashMap<VisitorId, usize> = HashMap::new();
        for trip in self.park_trips(id)? {
            let count = counts.entry(trip.visitor()).or_insert(0);
            if *count == 0 {
                order.push(trip.visitor());
            }
            *count += 1;
        }

        let mut best: Option<(VisitorId, usize)> = None;
        for visitor in order {
            let count = counts[&visitor];
            if best.is_none_or(|(_, max)| count > max) {
                best = Some((visitor, count));
            }
        }

        best.map(|(visitor, _)| self.repository.visitor(visitor))
            .transpose()
    }

    /// The park with the most trips across the registry.
    ///
    /// Parks are scanned in creation order and the first maximum wins a tie.
    /// Returns `None` when no park has been registered.
    pub fn most_visited(&self) -> Option<&'a NationalPark> {
        tracing::trace!("querying most visited national park");
        let repository = self.repository;
        let mut best: Option<&'a NationalPark> = None;
        for park in repository.parks() {
            if best.is_none_or(|max| park.total_visits() > max.total_visits()) {
                best = Some(park);
            }
        }
        best
    }
}
