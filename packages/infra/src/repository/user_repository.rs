//! # UserRepository
//!
//! ユーザーディレクトリの保管を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **追記のみ**: 更新・削除の操作は持たない
//! - **採番と追記の一体化**: 次の ID の計算と追記を同じ書き込みロック内で行い、
//!   並行な作成でも ID の重複や更新の消失が起きないようにする

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use userdir_domain::user::{User, UserAttributes, UserId};

use crate::{error::InfraError, seed};

/// ユーザーリポジトリトレイト
#[async_trait]
pub trait UserRepository: Send + Sync {
   /// すべてのユーザーを投入順で取得する
   async fn find_all(&self) -> Result<Vec<User>, InfraError>;

   /// ID でユーザーを検索する
   ///
   /// # 戻り値
   ///
   /// - `Ok(Some(user))`: ユーザーが見つかった場合
   /// - `Ok(None)`: ユーザーが見つからない場合
   async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError>;

   /// 新しい ID を採番してユーザーを末尾に追加する
   ///
   /// ID は末尾のユーザーの ID + 1。空の場合は [`UserId::FIRST`]。
   /// 属性に含まれる `id` は採番した ID で上書きされる。
   async fn append(&self, attributes: UserAttributes) -> Result<User, InfraError>;
}

/// プロセス内メモリ実装の UserRepository
///
/// `Clone` したインスタンスは同じコレクションを共有する。
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
   users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
   /// 与えられたユーザーを初期状態とするリポジトリを作成する
   pub fn new(users: Vec<User>) -> Self {
      Self {
         users: Arc::new(RwLock::new(users)),
      }
   }

   /// 初期ユーザーを投入済みのリポジトリを作成する
   pub fn seeded() -> Self {
      Self::new(seed::initial_users())
   }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn find_all(&self) -> Result<Vec<User>, InfraError> {
      Ok(self.users.read().await.clone())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError> {
      Ok(self
         .users
         .read()
         .await
         .iter()
         .find(|user| user.id() == id)
         .cloned())
   }

   #[tracing::instrument(skip_all, level = "debug")]
   async fn append(&self, attributes: UserAttributes) -> Result<User, InfraError> {
      let mut users = self.users.write().await;

      let id = match users.last() {
         Some(last) => last
            .id()
            .next()
            .ok_or_else(|| InfraError::id_exhausted(last.id()))?,
         None => UserId::FIRST,
      };

      let user = User::from_attributes(id, attributes);
      users.push(user.clone());

      Ok(user)
   }
}
