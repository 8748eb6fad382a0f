//! # ユーザーハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/users` - ユーザー一覧（`filter` / `value` で部分一致の絞り込み）
//! - `POST /api/users` - ユーザー作成
//! - `GET /api/users/{id}` - ユーザー詳細

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, Query, State},
   http::StatusCode,
   response::IntoResponse,
};
use serde::Deserialize;
use userdir_domain::user::UserAttributes;

use crate::{error::ApiError, usecase::UserUseCaseImpl};

/// ユーザー API の共有状態
pub struct UserState {
   pub usecase: UserUseCaseImpl,
}

/// 一覧の絞り込みクエリパラメータ
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
   /// 絞り込むフィールド名（`id` / `name` / `displayName`）
   pub filter: Option<String>,
   /// 部分一致させる文字列
   pub value:  Option<String>,
}

/// GET /api/users
///
/// ユーザーを投入順に返す。絞り込み条件がそろっていなければ全件。
pub async fn list_users(
   State(state): State<Arc<UserState>>,
   Query(query): Query<ListUsersQuery>,
) -> Result<impl IntoResponse, ApiError> {
   tracing::debug!(filter = ?query.filter, value = ?query.value, "ユーザー一覧を取得");

   let users = state
      .usecase
      .list_users(query.filter.as_deref(), query.value.as_deref())
      .await?;

   Ok((StatusCode::OK, Json(users)))
}

/// GET /api/users/{id}
///
/// ID は文字列で受け取り、整数への変換はユースケースに任せる。
/// 変換できなければ 400、存在しなければ 404（空のボディ）。
pub async fn get_user(
   State(state): State<Arc<UserState>>,
   Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   tracing::debug!(%id, "ユーザーを取得");

   let user = state.usecase.get_user(&id).await?;

   Ok((StatusCode::OK, Json(user)))
}

/// POST /api/users
///
/// JSON オブジェクトの属性をそのまま保存し、採番済みのユーザーを 201 で返す。
pub async fn create_user(
   State(state): State<Arc<UserState>>,
   Json(attributes): Json<UserAttributes>,
) -> Result<impl IntoResponse, ApiError> {
   tracing::debug!(attribute_count = attributes.len(), "ユーザーを作成");

   let user = state.usecase.create_user(attributes).await?;

   Ok((StatusCode::CREATED, Json(user)))
}
