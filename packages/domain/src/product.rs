//! # 商品
//!
//! 変更経路を持たない固定の商品カタログ。

use serde::{Deserialize, Serialize};

/// 商品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
   pub id:    u32,
   pub name:  String,
   pub price: u32,
}

impl Product {
   pub fn new(id: u32, name: impl Into<String>, price: u32) -> Self {
      Self {
         id,
         name: name.into(),
         price,
      }
   }

   /// 固定の商品カタログを返す
   ///
   /// 呼び出しごとに同じ 3 件を同じ順序で返す。
   pub fn catalog() -> Vec<Product> {
      vec![
         Product::new(1, "Bat", 100),
         Product::new(2, "Glove", 50),
         Product::new(3, "Ball", 20),
      ]
   }
}
