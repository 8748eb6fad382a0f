//! # アプリケーション設定
//!
//! 環境変数からサーバー設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `PORT` | No | `3000` | ポート番号 |
//!
//! 空文字列が設定されている場合も未設定として扱う。
//! ログ関連（`RUST_LOG` / `LOG_FORMAT`）は `userdir_shared::observability` が読む。
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use userdir_api::config::ServerConfig;
//!
//! dotenvy::dotenv().ok();
//!
//! let config = ServerConfig::from_env()?;
//! println!("サーバー: {}:{}", config.host, config.port);
//! ```

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// 設定読み込み時のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
   /// `PORT` がポート番号として解釈できない
   #[error("PORT が不正です: {0:?}")]
   InvalidPort(String),
}

/// HTTP サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
   /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
   pub host: String,
   /// ポート番号（例: `3000`, `8080`）
   pub port: u16,
}

impl ServerConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|key| env::var(key).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// テストではプロセスの環境変数を書き換えずに済むよう、こちらを使う。
   ///
   /// # エラー
   ///
   /// `PORT` が空でなく、かつ `u16` として解釈できない場合は
   /// `ConfigError::InvalidPort` を返す。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

      let host = non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
      let port = match non_empty("PORT") {
         Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
         None => DEFAULT_PORT,
      };

      Ok(Self { host, port })
   }
}
