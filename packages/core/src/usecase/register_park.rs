//! UseCase: 国立公園登録処理

use crate::domain::{ParkId, ParkName, TravelRepository, ValidationError};

/// 国立公園登録のユースケース
pub struct RegisterParkUseCase<'a> {
    /// Repository（データアクセス層の抽象化）
    repository: &'a mut dyn TravelRepository,
}

impl<'a> RegisterParkUseCase<'a> {
    /// 新しい RegisterParkUseCase を作成
    pub fn new(repository: &'a mut dyn TravelRepository) -> Self {
        Self { repository }
    }

    /// 国立公園登録を実行
    ///
    /// 登録された国立公園はレジストリの末尾に追加され、
    /// `most_visited` の集計対象になります。
    ///
    /// # Returns
    ///
    /// * `Ok(ParkId)` - 登録された国立公園のキー
    /// * `Err(ValidationError)` - 名前が 3 文字未満
    pub fn execute(&mut self, name: impl Into<String>) -> Result<ParkId, ValidationError> {
        let name = ParkName::new(name.into())?;
        Ok(self.repository.add_park(name))
    }
}
