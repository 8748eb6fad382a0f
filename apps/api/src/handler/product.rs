//! # 商品ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/products` - 固定の商品カタログ

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use userdir_infra::repository::ProductRepository;

use crate::error::ApiError;

/// 商品 API の共有状態
pub struct ProductState {
   pub product_repository: Arc<dyn ProductRepository>,
}

/// GET /api/products
pub async fn list_products(
   State(state): State<Arc<ProductState>>,
) -> Result<impl IntoResponse, ApiError> {
   let products = state.product_repository.find_all().await?;

   Ok((StatusCode::OK, Json(products)))
}
