//! ユーザー操作ユースケース

use std::sync::Arc;

use userdir_domain::user::{User, UserAttributes, UserFilter, UserId};
use userdir_infra::repository::UserRepository;

use crate::error::ApiError;

/// ユーザー操作ユースケース
pub struct UserUseCaseImpl {
   user_repository: Arc<dyn UserRepository>,
}

impl UserUseCaseImpl {
   pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
      Self { user_repository }
   }

   /// ユーザー一覧を取得する
   ///
   /// `filter` と `value` が両方とも空でない場合だけ部分一致で絞り込む。
   /// 結果は投入順を保つ。
   pub async fn list_users(
      &self,
      filter: Option<&str>,
      value: Option<&str>,
   ) -> Result<Vec<User>, ApiError> {
      let filter = UserFilter::from_query(filter, value)?;
      let users = self.user_repository.find_all().await?;

      Ok(match filter {
         Some(filter) => users.into_iter().filter(|user| filter.matches(user)).collect(),
         None => users,
      })
   }

   /// パスの生の ID でユーザーを取得する
   pub async fn get_user(&self, raw_id: &str) -> Result<User, ApiError> {
      let id = UserId::parse(raw_id)?;

      self.user_repository
         .find_by_id(id)
         .await?
         .ok_or(ApiError::NotFound)
   }

   /// ユーザーを作成する
   ///
   /// ID はリポジトリが採番し、ボディ中の `id` は無視される。
   pub async fn create_user(&self, attributes: UserAttributes) -> Result<User, ApiError> {
      let user = self.user_repository.append(attributes).await?;

      tracing::info!(user.id = %user.id(), "ユーザーを作成しました");

      Ok(user)
   }
}
