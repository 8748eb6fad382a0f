//! # ドメイン層エラー定義
//!
//! クライアント入力がドメインのルールに違反した状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `InvalidId` | 400 Bad Request | パスパラメータが整数として解釈できない |
//! | `FieldNotFound` | 400 Bad Request | 絞り込みキーが既知のフィールドではない |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
/// 「見つからない」は入力の誤りではないため、ここには含めない
/// （リポジトリが `Option` で返す）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
   /// ID が 10 進整数として解釈できない
   ///
   /// 保持する文字列はクライアントが送ってきた生の値。
   #[error("不正な ID です: {0:?}")]
   InvalidId(String),

   /// 絞り込みキーに対応するフィールドが存在しない
   #[error("フィールドが存在しません: {0}")]
   FieldNotFound(String),
}
