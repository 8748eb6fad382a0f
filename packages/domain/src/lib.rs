//! # Userdir ドメイン層
//!
//! ユーザーディレクトリの中核となるドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain → shared
//! ```
//!
//! ドメイン層はインフラ層（ストア、外部サービス）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`user`] - ユーザーエンティティ、ID、絞り込み条件
//! - [`product`] - 固定の商品カタログ
//!
//! ## 使用例
//!
//! ```rust
//! use userdir_domain::{DomainError, user::UserId};
//!
//! let id = UserId::parse("3").unwrap();
//! assert_eq!(id.as_i64(), 3);
//!
//! assert!(matches!(UserId::parse("abc"), Err(DomainError::InvalidId(_))));
//! ```

pub mod error;
pub mod product;
pub mod user;

pub use error::DomainError;
