//! # ProductRepository
//!
//! 固定の商品カタログを返すリポジトリ。変更操作は持たない。

use async_trait::async_trait;
use userdir_domain::product::Product;

use crate::error::InfraError;

/// 商品リポジトリトレイト
#[async_trait]
pub trait ProductRepository: Send + Sync {
   /// すべての商品を取得する
   async fn find_all(&self) -> Result<Vec<Product>, InfraError>;
}

/// 固定カタログの ProductRepository
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProductRepository;

#[async_trait]
impl ProductRepository for StaticProductRepository {
   async fn find_all(&self) -> Result<Vec<Product>, InfraError> {
      Ok(Product::catalog())
   }
}
