//! UseCase: 訪問者登録処理

use crate::domain::{TravelRepository, ValidationError, VisitorId, VisitorName};

/// 訪問者登録のユースケース
pub struct RegisterVisitorUseCase<'a> {
    /// Repository（データアクセス層の抽象化）
    repository: &'a mut dyn TravelRepository,
}

impl<'a> RegisterVisitorUseCase<'a> {
    /// 新しい RegisterVisitorUseCase を作成
    pub fn new(repository: &'a mut dyn TravelRepository) -> Self {
        Self { repository }
    }

    /// 訪問者登録を実行
    ///
    /// # Returns
    ///
    /// * `Ok(VisitorId)` - 登録された訪問者のキー
    /// * `Err(ValidationError)` - 名前が 1〜15 文字でない
    pub fn execute(&mut self, name: impl Into<String>) -> Result<VisitorId, ValidationError> {
        let name = VisitorName::new(name.into())?;
        Ok(self.repository.add_visitor(name))
    }
}
