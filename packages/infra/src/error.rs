//! # インフラ層エラー定義
//!
//! ストア操作で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別
//!
//! `SpanTrace` はエラー生成時に捕捉されるため、API 層でログに出すと
//! どのリクエスト・どのリポジトリ操作で発生したかを追える。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;
use userdir_domain::user::UserId;

/// インフラ層で発生するエラー
///
/// エラー種別に応じた処理には [`kind()`](InfraError::kind) を使用する。
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
   kind:       InfraErrorKind,
   span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
   /// ID の採番余地がない
   ///
   /// 最後のユーザーの ID が `i64::MAX` に達している。
   #[error("ID を採番できません: {last} の次の ID が存在しません")]
   IdExhausted {
      /// 最後に割り当て済みの ID
      last: UserId,
   },
}

impl InfraError {
   /// エラー種別を取得する
   pub fn kind(&self) -> &InfraErrorKind {
      &self.kind
   }

   /// SpanTrace を取得する
   pub fn span_trace(&self) -> &SpanTrace {
      &self.span_trace
   }

   /// ID 採番不能エラーを生成する
   pub fn id_exhausted(last: UserId) -> Self {
      Self {
         kind:       InfraErrorKind::IdExhausted { last },
         span_trace: SpanTrace::capture(),
      }
   }
}

impl fmt::Debug for InfraError {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("InfraError")
         .field("kind", &self.kind)
         .field("span_trace", &self.span_trace)
         .finish()
   }
}

impl std::error::Error for InfraError {
   fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
      std::error::Error::source(&self.kind)
   }
}
