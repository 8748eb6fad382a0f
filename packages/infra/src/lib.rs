//! # Userdir インフラ層
//!
//! ユーザーと商品の保管場所を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! リポジトリトレイトと、そのプロセス内メモリ実装を提供する。
//! ハンドラやユースケースはトレイト経由でのみストアにアクセスし、
//! グローバルな可変状態には触れない。
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトとインメモリ実装
//! - [`seed`] - 起動時に投入する初期ユーザー
//!
//! ## 使用例
//!
//! ```rust
//! use userdir_infra::repository::{InMemoryUserRepository, UserRepository};
//!
//! # tokio_test_block_on(async {
//! let repository = InMemoryUserRepository::seeded();
//! let users = repository.find_all().await.unwrap();
//! assert_eq!(users.len(), 7);
//! # });
//! # fn tokio_test_block_on(f: impl std::future::Future<Output = ()>) {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

pub mod error;
pub mod repository;
pub mod seed;

pub use error::{InfraError, InfraErrorKind};
