//! # リポジトリ
//!
//! ハンドラ・ユースケースから使うリポジトリトレイトと、その実装を提供する。
//!
//! ## 設計方針
//!
//! - **明示的な所有**: コレクションはリポジトリが所有し、`Arc<dyn Trait>` で共有する
//! - **テスタビリティ**: トレイト経由で差し替え可能な設計

pub mod product_repository;
pub mod user_repository;

pub use product_repository::{ProductRepository, StaticProductRepository};
pub use user_repository::{InMemoryUserRepository, UserRepository};
