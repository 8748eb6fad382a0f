//! # ルートハンドラ

use axum::{Json, http::StatusCode, response::IntoResponse};
use userdir_shared::MessageResponse;

/// GET /
///
/// 疎通確認用の挨拶を返す。ステータスは 201 で固定。
pub async fn hello() -> impl IntoResponse {
   (StatusCode::CREATED, Json(MessageResponse::new("Hello World!")))
}
