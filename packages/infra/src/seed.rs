//! # 初期ユーザー
//!
//! プロセス起動時にストアへ投入する固定のユーザー。
//! ストアは揮発性のため、再起動すると常にこの状態に戻る。

use userdir_domain::user::{User, UserId};

/// 初期ユーザーを投入順に返す
pub fn initial_users() -> Vec<User> {
   [
      (1, "john", "John"),
      (2, "will", "Will"),
      (3, "frank", "Frank"),
      (4, "jane", "Jane"),
      (5, "susan", "Susan"),
      (6, "james", "James"),
      (7, "jill", "Jill"),
   ]
   .into_iter()
   .map(|(id, name, display_name)| User::new(UserId::new(id), name, display_name))
   .collect()
}
