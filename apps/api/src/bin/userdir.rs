//! # Userdir サーバー
//!
//! ユーザーディレクトリ API を提供する HTTP サーバー。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,userdir=debug`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run --bin userdir
//!
//! PORT=8080 LOG_FORMAT=json cargo run --bin userdir --release
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use tokio::net::TcpListener;
use userdir_api::{app_builder::build_app, config::ServerConfig};
use userdir_infra::repository::{InMemoryUserRepository, StaticProductRepository};
use userdir_shared::observability::{TracingConfig, init_tracing};

/// サーバーのエントリーポイント
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. サーバー設定の読み込み
/// 4. 初期ユーザーを投入したストアとルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
   dotenvy::dotenv().ok();

   let tracing_config = TracingConfig::from_env("userdir");
   let service_name = tracing_config.service_name.clone();
   init_tracing(tracing_config);
   let _span = tracing::info_span!("app", service = %service_name).entered();

   let config = ServerConfig::from_env().context("サーバー設定の読み込みに失敗しました")?;

   let app = build_app(
      Arc::new(InMemoryUserRepository::seeded()),
      Arc::new(StaticProductRepository),
   );

   let listener = TcpListener::bind((config.host.as_str(), config.port))
      .await
      .with_context(|| format!("{}:{} にバインドできません", config.host, config.port))?;
   tracing::info!("サーバーが起動しました: {}", listener.local_addr()?);

   axum::serve(listener, app).await?;

   Ok(())
}
