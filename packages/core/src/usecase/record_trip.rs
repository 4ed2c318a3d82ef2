//! UseCase: 旅行記録処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RecordTripUseCase::execute() メソッド
//! - 日付の検証と、訪問者・国立公園の両方への旅行の登録
//!
//! ### どのような状況を想定しているか
//! - 正常系：旅行の記録
//! - 異常系：日付の形式が不正（どちらの端点も変更されない）
//! - 異常系：存在しない訪問者・国立公園

use crate::domain::{ParkId, TravelRepository, TripDate, TripId, VisitorId};

use super::error::RecordTripError;

/// 旅行記録のユースケース
pub struct RecordTripUseCase<'a> {
    /// Repository（データアクセス層の抽象化）
    repository: &'a mut dyn TravelRepository,
}

impl<'a> RecordTripUseCase<'a> {
    /// 新しい RecordTripUseCase を作成
    pub fn new(repository: &'a mut dyn TravelRepository) -> Self {
        Self { repository }
    }

    /// 旅行記録を実行
    ///
    /// # Arguments
    ///
    /// * `visitor` - 訪問者のキー
    /// * `national_park` - 国立公園のキー
    /// * `start_date` / `end_date` - `Month Day<序数>` 形式の日付
    ///
    /// # Returns
    ///
    /// * `Ok(TripId)` - 記録された旅行のキー
    /// * `Err(RecordTripError)` - 記録失敗
    pub fn execute(
        &mut self,
        visitor: VisitorId,
        national_park: ParkId,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<TripId, RecordTripError> {
        // 1. 日付の検証（Repository に触れる前に行う）
        let start_date = TripDate::new(start_date.into())?;
        let end_date = TripDate::new(end_date.into())?;

        // 2. Repository に旅行を追加（訪問者と国立公園の両方を更新）
        let trip = self
            .repository
            .add_trip(visitor, national_park, start_date, end_date)?;

        Ok(trip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{RepositoryError, ValidationError},
        infrastructure::repository::InMemoryTravelRepository,
        usecase::{RegisterParkUseCase, RegisterVisitorUseCase},
    };

    fn create_test_repository() -> (InMemoryTravelRepository, VisitorId, ParkId) {
        let mut repo = InMemoryTravelRepository::new();
        let visitor = RegisterVisitorUseCase::new(&mut repo)
            .execute("John")
            .unwrap();
        let park = RegisterParkUseCase::new(&mut repo)
            .execute("Yellowstone")
            .unwrap();
        (repo, visitor, park)
    }

    #[test]
    fn test_record_trip_success() {
        // テスト項目: 旅行が記録され、両端点にちょうど 1 回追加される
        // given (前提条件):
        let (mut repo, visitor, park) = create_test_repository();

        // when (操作):
        let result = RecordTripUseCase::new(&mut repo).execute(visitor, park, "May 5th", "May 6th");

        // then (期待する結果):
        let trip_id = result.unwrap();
        assert_eq!(repo.visitor(visitor).unwrap().trips(), &[trip_id]);
        assert_eq!(repo.park(park).unwrap().trips(), &[trip_id]);

        let trip = repo.trip(trip_id).unwrap();
        assert_eq!(trip.visitor(), visitor);
        assert_eq!(trip.national_park(), park);
        assert_eq!(trip.start_date().as_str(), "May 5th");
        assert_eq!(trip.end_date().as_str(), "May 6th");
    }

    #[test]
    fn test_record_trip_invalid_start_date() {
        // テスト項目: 開始日が不正な場合はエラーで、どちらの端点も変更されない
        // given (前提条件):
        let (mut repo, visitor, park) = create_test_repository();

        // when (操作):
        let result = RecordTripUseCase::new(&mut repo).execute(visitor, park, "May", "May 6th");

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            RecordTripError::Validation(ValidationError::InvalidDateFormat {
                value: "May".to_string()
            })
        );
        assert!(repo.visitor(visitor).unwrap().trips().is_empty());
        assert!(repo.park(park).unwrap().trips().is_empty());
        assert_eq!(repo.trip_count(), 0);
    }

    #[test]
    fn test_record_trip_invalid_end_date() {
        // テスト項目: 終了日が不正な場合もエラーで、メッセージは検証エラーそのもの
        // given (前提条件):
        let (mut repo, visitor, park) = create_test_repository();

        // when (操作):
        let result = RecordTripUseCase::new(&mut repo).execute(visitor, park, "May 5th", "May 5");

        // then (期待する結果):
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date format. Date should be in the format 'Month Dayth'."
        );
        assert_eq!(repo.park(park).unwrap().total_visits(), 0);
    }

    #[test]
    fn test_record_trip_unknown_park() {
        // テスト項目: 存在しない国立公園への旅行はエラー
        // given (前提条件):
        let (mut repo, visitor, _park) = create_test_repository();

        // when (操作):
        let result = RecordTripUseCase::new(&mut repo).execute(
            visitor,
            ParkId::new(42),
            "May 5th",
            "May 6th",
        );

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            RecordTripError::Repository(RepositoryError::ParkNotFound(ParkId::new(42)))
        );
        assert!(repo.visitor(visitor).unwrap().trips().is_empty());
    }

    #[test]
    fn test_record_repeated_trips_to_same_park() {
        // テスト項目: 同じ国立公園への繰り返しの旅行はそれぞれ記録される
        // given (前提条件):
        let (mut repo, visitor, park) = create_test_repository();
        let mut usecase = RecordTripUseCase::new(&mut repo);

        // when (操作):
        let first = usecase.execute(visitor, park, "May 5th", "May 6th").unwrap();
        let second = usecase.execute(visitor, park, "June 1st", "June 2nd").unwrap();

        // then (期待する結果):
        assert_ne!(first, second);
        assert_eq!(repo.park(park).unwrap().total_visits(), 2);
        assert_eq!(repo.visitor(visitor).unwrap().trips(), &[first, second]);
    }
}
