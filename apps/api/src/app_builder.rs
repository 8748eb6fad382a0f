//! # アプリケーション組み立て
//!
//! リポジトリを受け取り、State → Router の順に組み立てる。
//! バイナリと統合テストの両方から同じルーター構成を使う。

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   trace::TraceLayer,
};
use userdir_infra::repository::{ProductRepository, UserRepository};
use userdir_shared::observability::{MakeRequestUuidV7, make_request_span};

use crate::{
   handler::{
      ProductState,
      UserState,
      create_user,
      get_user,
      health_check,
      hello,
      list_products,
      list_users,
   },
   usecase::UserUseCaseImpl,
};

/// ルーターを構築する
pub fn build_app(
   user_repository: Arc<dyn UserRepository>,
   product_repository: Arc<dyn ProductRepository>,
) -> Router {
   let user_state = Arc::new(UserState {
      usecase: UserUseCaseImpl::new(user_repository),
   });
   let product_state = Arc::new(ProductState { product_repository });

   Router::new()
      .route("/", get(hello))
      .route("/health", get(health_check))
      .merge(
         Router::new()
            .route("/api/users", get(list_users).post(create_user))
            .route("/api/users/{id}", get(get_user))
            .with_state(user_state),
      )
      .merge(
         Router::new()
            .route("/api/products", get(list_products))
            .with_state(product_state),
      )
      // レイヤーは下から順に適用される:
      // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
      // 2. TraceLayer: request_id を含むスパンを作成
      // 3. PropagateRequestIdLayer: レスポンスヘッダーへ request_id をコピー
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
