//! # ユーザー
//!
//! ユーザーエンティティと、一覧の絞り込みに使う値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`User`] | ユーザー | ディレクトリに登録された 1 件のレコード |
//! | [`UserId`] | ユーザー ID | 作成順に採番される整数。再利用しない |
//! | [`UserField`] | 絞り込みフィールド | 絞り込みキーとして指定できるフィールドの一覧 |
//! | [`UserFilter`] | 絞り込み条件 | フィールドと部分一致させる文字列の組 |
//!
//! ## 設計方針
//!
//! - **属性の保持**: 作成時に受け取ったキーはそのまま保持し、受け取った順で返す
//! - **明示的なフィールド表**: 文字列キーによる動的なプロパティ参照は行わず、
//!   [`UserField`] に列挙したフィールドだけを絞り込み対象とする
//!
//! ## 使用例
//!
//! ```rust
//! use userdir_domain::user::{User, UserFilter, UserId};
//!
//! let john = User::new(UserId::new(1), "john", "John");
//! let filter = UserFilter::from_query(Some("name"), Some("jo")).unwrap().unwrap();
//!
//! assert!(filter.matches(&john));
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{EnumString, IntoStaticStr};

use crate::DomainError;

/// ユーザーの属性（`id` 以外のキーと値）
pub type UserAttributes = Map<String, Value>;

/// ユーザー ID
///
/// JSON 上は素の整数として表現する。
#[derive(
   Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct UserId(i64);

impl UserId {
   /// ディレクトリが空のときに最初に割り当てる ID
   pub const FIRST: Self = Self(1);

   pub fn new(value: i64) -> Self {
      Self(value)
   }

   /// パスパラメータなどの文字列から ID を解釈する
   ///
   /// 標準の整数パースに従う（先頭の `+`/`-` は可、空白や末尾の非数字は不可）。
   ///
   /// # エラー
   ///
   /// 解釈できない場合は `DomainError::InvalidId` を返す。
   pub fn parse(raw: &str) -> Result<Self, DomainError> {
      raw.parse::<i64>()
         .map(Self)
         .map_err(|_| DomainError::InvalidId(raw.to_string()))
   }

   pub fn as_i64(&self) -> i64 {
      self.0
   }

   /// 次に割り当てる ID を返す
   ///
   /// `i64::MAX` の次は存在しないため `None` を返す。
   pub fn next(&self) -> Option<Self> {
      self.0.checked_add(1).map(Self)
   }
}

/// ユーザー
///
/// `id` と、作成時に受け取った属性（`name`, `displayName` など）を持つ。
/// シリアライズ時は `id` が先頭、続いて属性が受け取った順に並ぶ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
   id:         UserId,
   #[serde(flatten)]
   attributes: UserAttributes,
}

impl User {
   /// `name` と `displayName` を持つユーザーを作成する
   pub fn new(id: UserId, name: impl Into<String>, display_name: impl Into<String>) -> Self {
      let mut attributes = UserAttributes::new();
      attributes.insert(UserField::Name.key().to_string(), Value::String(name.into()));
      attributes.insert(
         UserField::DisplayName.key().to_string(),
         Value::String(display_name.into()),
      );
      Self { id, attributes }
   }

   /// 任意の属性からユーザーを作成する
   ///
   /// 属性に `id` キーが含まれていても破棄し、引数の `id` を採用する。
   pub fn from_attributes(id: UserId, attributes: UserAttributes) -> Self {
      let attributes = attributes
         .into_iter()
         .filter(|(key, _)| key != UserField::Id.key())
         .collect();
      Self { id, attributes }
   }

   pub fn id(&self) -> UserId {
      self.id
   }

   pub fn name(&self) -> Option<&str> {
      self.attributes.get(UserField::Name.key()).and_then(Value::as_str)
   }

   pub fn display_name(&self) -> Option<&str> {
      self.attributes
         .get(UserField::DisplayName.key())
         .and_then(Value::as_str)
   }

   /// 属性を名前で取得する
   pub fn attribute(&self, key: &str) -> Option<&Value> {
      self.attributes.get(key)
   }

   pub fn attributes(&self) -> &UserAttributes {
      &self.attributes
   }
}

/// 絞り込みに使えるフィールド
///
/// クエリパラメータ `filter` の値と 1 対 1 に対応する（大文字小文字を区別）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum UserField {
   #[strum(serialize = "id")]
   Id,
   #[strum(serialize = "name")]
   Name,
   #[strum(serialize = "displayName")]
   DisplayName,
}

impl UserField {
   /// 絞り込みキーからフィールドを引く
   ///
   /// # エラー
   ///
   /// 既知のフィールドでない場合は `DomainError::FieldNotFound` を返す。
   pub fn from_key(key: &str) -> Result<Self, DomainError> {
      key.parse()
         .map_err(|_| DomainError::FieldNotFound(key.to_string()))
   }

   /// JSON 上のキー名
   pub fn key(self) -> &'static str {
      self.into()
   }

   /// ユーザーのこのフィールドを文字列表現で取り出す
   ///
   /// 文字列はそのまま、それ以外の JSON 値は JSON テキストにする。
   /// 属性を持たないユーザーでは `None`。
   pub fn text_of(self, user: &User) -> Option<String> {
      match self {
         Self::Id => Some(user.id().to_string()),
         Self::Name | Self::DisplayName => user.attribute(self.key()).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
         }),
      }
   }
}

/// ユーザー一覧の絞り込み条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFilter {
   field: UserField,
   value: String,
}

impl UserFilter {
   pub fn new(field: UserField, value: impl Into<String>) -> Self {
      Self {
         field,
         value: value.into(),
      }
   }

   /// クエリパラメータ `filter` / `value` から条件を組み立てる
   ///
   /// どちらかが欠けている、または空文字列の場合は `Ok(None)`（絞り込みなし）。
   /// キーの検証は両方がそろったときだけ行う。
   pub fn from_query(key: Option<&str>, value: Option<&str>) -> Result<Option<Self>, DomainError> {
      match (key, value) {
         (Some(key), Some(value)) if !key.is_empty() && !value.is_empty() => {
            Ok(Some(Self::new(UserField::from_key(key)?, value)))
         }
         _ => Ok(None),
      }
   }

   pub fn field(&self) -> UserField {
      self.field
   }

   pub fn value(&self) -> &str {
      &self.value
   }

   /// ユーザーが条件に一致するか（部分一致、大文字小文字を区別）
   pub fn matches(&self, user: &User) -> bool {
      self.field
         .text_of(user)
         .is_some_and(|text| text.contains(&self.value))
   }
}
