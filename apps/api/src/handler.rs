//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── health.rs   # ヘルスチェック
//!     ├── product.rs  # 商品カタログ
//!     ├── root.rs     # ルートの挨拶
//!     └── user.rs     # ユーザーディレクトリ
//! ```

pub mod health;
pub mod product;
pub mod root;
pub mod user;

pub use health::health_check;
pub use product::{ProductState, list_products};
pub use root::hello;
pub use user::{UserState, create_user, get_user, list_users};
