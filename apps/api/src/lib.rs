//! # Userdir API サーバー
//!
//! ユーザーディレクトリ API のハンドラ、ユースケース、設定を提供する。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │   Client    │────▶│   handler   │────▶│     usecase      │
//! │   (HTTP)    │     │   (axum)    │     │ (UserUseCaseImpl)│
//! └─────────────┘     └─────────────┘     └──────────────────┘
//!                                                  │
//!                                                  ▼
//!                                         ┌──────────────────┐
//!                                         │    repository    │
//!                                         │   (in-memory)    │
//!                                         └──────────────────┘
//! ```
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - State の組み立てとルーター構築
//! - [`config`] - サーバー設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - ユーザー操作のビジネスロジック

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
