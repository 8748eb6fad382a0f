//! # API エラーハンドリング
//!
//! ハンドラが返すエラーの定義と、axum レスポンスへの変換を行う。
//!
//! ## エラーの階層
//!
//! ```text
//! DomainError / InfraError
//!        ↓ From
//! ApiError
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + { "msg": ... })
//! ```
//!
//! ## マッピング
//!
//! | ApiError | HTTP Status | ボディ |
//! |----------|-------------|--------|
//! | InvalidId | 400 | `{"msg":"Invalid ID"}` |
//! | FieldNotFound | 400 | `{"msg":"Invalid filter field: <key>"}` |
//! | NotFound | 404 | 空 |
//! | Infra | 500 | `{"msg":"Internal Server Error"}` |

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use userdir_domain::DomainError;
use userdir_infra::InfraError;
use userdir_shared::MessageResponse;

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// パスの ID が整数として解釈できない（400 Bad Request）
   #[error("不正な ID です")]
   InvalidId,

   /// 指定した ID のユーザーが存在しない（404 Not Found）
   #[error("リソースが見つかりません")]
   NotFound,

   /// 絞り込みキーが既知のフィールドではない（400 Bad Request）
   #[error("不正な絞り込みフィールドです: {0}")]
   FieldNotFound(String),

   /// ストア操作の失敗（500 Internal Server Error）
   ///
   /// 詳細はサーバーログにのみ出力し、クライアントには返さない。
   #[error("内部サーバーエラー: {0}")]
   Infra(#[from] InfraError),
}

impl From<DomainError> for ApiError {
   fn from(err: DomainError) -> Self {
      match err {
         DomainError::InvalidId(_) => Self::InvalidId,
         DomainError::FieldNotFound(key) => Self::FieldNotFound(key),
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      match self {
         ApiError::InvalidId => {
            (StatusCode::BAD_REQUEST, Json(MessageResponse::new("Invalid ID"))).into_response()
         }
         ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
         ApiError::FieldNotFound(key) => (
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::new(format!("Invalid filter field: {key}"))),
         )
            .into_response(),
         ApiError::Infra(err) => {
            tracing::error!(
               error.kind = "infra",
               error.category = "infrastructure",
               "ストア操作でエラーが発生: {}\n{}",
               err,
               err.span_trace()
            );
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               Json(MessageResponse::new("Internal Server Error")),
            )
               .into_response()
         }
      }
   }
}
