//! # Userdir 共有ユーティリティ
//!
//! このクレートは、Userdir プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, api）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換は api クレートの責務）
//!
//! ## モジュール構成
//!
//! - [`message_response`] - `{ "msg": ... }` 形式のメッセージペイロード
//! - [`health`] - ヘルスチェックのレスポンス型
//! - [`observability`] - トレーシング初期化と Request ID 生成

pub mod health;
pub mod message_response;
pub mod observability;

pub use health::HealthResponse;
pub use message_response::MessageResponse;
