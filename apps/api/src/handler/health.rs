//! # ヘルスチェックハンドラ
//!
//! ```text
//! GET /health
//! ```
//!
//! ストアの状態は確認せず、プロセスが応答できることだけを返す。

use axum::Json;
use userdir_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// 常に 200 OK と `{"status":"healthy","version":"<Cargo.toml のバージョン>"}` を返す。
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
