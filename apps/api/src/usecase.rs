//! # ユースケース層
//!
//! ユーザーディレクトリのビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは入出力の変換だけを行い、判定はユースケースに集約

pub mod user;

pub use user::UserUseCaseImpl;
