//! # メッセージレスポンス
//!
//! ルートエンドポイントの挨拶や、クライアント向けエラーで返す
//! `{ "msg": "..." }` 形式のペイロード。

use serde::{Deserialize, Serialize};

/// `{ "msg": "..." }` 形式のレスポンス
///
/// ## 使用例
///
/// ```
/// use userdir_shared::MessageResponse;
///
/// let response = MessageResponse::new("Hello World!");
/// assert_eq!(response.msg, "Hello World!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
   pub msg: String,
}

impl MessageResponse {
   /// 新しい `MessageResponse` を作成する
   pub fn new(msg: impl Into<String>) -> Self {
      Self { msg: msg.into() }
   }
}
