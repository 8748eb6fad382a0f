//! # ユーザーディレクトリ API の統合テスト
//!
//! `build_app` で組み立てたルーターに `oneshot` でリクエストを送り、
//! ステータス・ボディ・ヘッダーを検証する。

use std::sync::Arc;

use axum::{
   Router,
   body::Body,
   http::{Request, StatusCode, header},
   response::Response,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;
use userdir_api::app_builder::build_app;
use userdir_infra::repository::{InMemoryUserRepository, StaticProductRepository};

fn test_app() -> Router {
   build_app(
      Arc::new(InMemoryUserRepository::seeded()),
      Arc::new(StaticProductRepository),
   )
}

fn get(uri: &str) -> Request<Body> {
   Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
   Request::builder()
      .method("POST")
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
   axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap()
      .to_vec()
}

async fn body_json(response: Response) -> Value {
   serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn names(users: &Value) -> Vec<&str> {
   users
      .as_array()
      .unwrap()
      .iter()
      .map(|u| u["name"].as_str().unwrap())
      .collect()
}

#[tokio::test]
async fn test_ルートは201で挨拶を返す() {
   let response = test_app().oneshot(get("/")).await.unwrap();

   assert_eq!(response.status(), StatusCode::CREATED);
   assert_eq!(body_json(response).await, json!({"msg": "Hello World!"}));
}

#[tokio::test]
async fn test_ヘルスチェックはhealthyを返す() {
   let response = test_app().oneshot(get("/health")).await.unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(
      body_json(response).await,
      json!({"status": "healthy", "version": env!("CARGO_PKG_VERSION")})
   );
}

#[tokio::test]
async fn test_初期状態の一覧は7件を投入順に返す() {
   let response = test_app().oneshot(get("/api/users")).await.unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   let users = body_json(response).await;
   assert_eq!(
      names(&users),
      vec!["john", "will", "frank", "jane", "susan", "james", "jill"]
   );
   assert_eq!(users[0], json!({"id": 1, "name": "john", "displayName": "John"}));
}

#[tokio::test]
async fn test_nameで部分一致の絞り込みができる() {
   let response = test_app()
      .oneshot(get("/api/users?filter=name&value=j"))
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(names(&body_json(response).await), vec!["john", "jane", "james", "jill"]);
}

#[tokio::test]
async fn test_display_nameの絞り込みは大文字小文字を区別する() {
   let app = test_app();

   let lower = app
      .clone()
      .oneshot(get("/api/users?filter=displayName&value=j"))
      .await
      .unwrap();
   let upper = app
      .oneshot(get("/api/users?filter=displayName&value=J"))
      .await
      .unwrap();

   assert_eq!(body_json(lower).await, json!([]));
   assert_eq!(names(&body_json(upper).await), vec!["john", "jane", "james", "jill"]);
}

#[tokio::test]
async fn test_idの10進表記で部分一致の絞り込みができる() {
   let response = test_app()
      .oneshot(get("/api/users?filter=id&value=3"))
      .await
      .unwrap();

   assert_eq!(names(&body_json(response).await), vec!["frank"]);
}

#[rstest]
#[case("/api/users?filter=name")]
#[case("/api/users?value=j")]
#[case("/api/users?filter=&value=j")]
#[case("/api/users?filter=name&value=")]
#[tokio::test]
async fn test_条件が片方しかなければ全件を返す(#[case] uri: &str) {
   let response = test_app().oneshot(get(uri)).await.unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(body_json(response).await.as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_未知の絞り込みフィールドは400を返す() {
   let response = test_app()
      .oneshot(get("/api/users?filter=email&value=x"))
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   assert_eq!(
      body_json(response).await,
      json!({"msg": "Invalid filter field: email"})
   );
}

#[tokio::test]
async fn test_idでユーザーを取得できる() {
   let response = test_app().oneshot(get("/api/users/4")).await.unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(
      body_json(response).await,
      json!({"id": 4, "name": "jane", "displayName": "Jane"})
   );
}

#[rstest]
#[case("/api/users/abc")]
#[case("/api/users/1.5")]
#[case("/api/users/4x")]
#[tokio::test]
async fn test_整数でないidは400を返す(#[case] uri: &str) {
   let response = test_app().oneshot(get(uri)).await.unwrap();

   assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   assert_eq!(body_json(response).await, json!({"msg": "Invalid ID"}));
}

#[tokio::test]
async fn test_存在しないidは404と空のボディを返す() {
   let response = test_app().oneshot(get("/api/users/999")).await.unwrap();

   assert_eq!(response.status(), StatusCode::NOT_FOUND);
   assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_作成したユーザーは201で返り一覧と詳細から取得できる() {
   let app = test_app();

   let created = app
      .clone()
      .oneshot(post_json(
         "/api/users",
         r#"{"name":"ken","displayName":"Ken","role":"admin"}"#,
      ))
      .await
      .unwrap();

   assert_eq!(created.status(), StatusCode::CREATED);
   let expected = json!({"id": 8, "name": "ken", "displayName": "Ken", "role": "admin"});
   assert_eq!(body_json(created).await, expected);

   let fetched = app.clone().oneshot(get("/api/users/8")).await.unwrap();
   assert_eq!(body_json(fetched).await, expected);

   let listed = app.oneshot(get("/api/users")).await.unwrap();
   let users = body_json(listed).await;
   assert_eq!(users.as_array().unwrap().len(), 8);
   assert_eq!(users[7], expected);
}

#[tokio::test]
async fn test_ボディのidは採番したidで上書きされる() {
   let app = test_app();

   let created = app
      .clone()
      .oneshot(post_json("/api/users", r#"{"id":1,"name":"dup","displayName":"Dup"}"#))
      .await
      .unwrap();

   assert_eq!(body_json(created).await["id"], json!(8));

   let original = app.oneshot(get("/api/users/1")).await.unwrap();
   assert_eq!(body_json(original).await["name"], json!("john"));
}

#[tokio::test]
async fn test_連続した作成はidが1ずつ増える() {
   let app = test_app();

   for expected_id in 8..=10 {
      let response = app
         .clone()
         .oneshot(post_json("/api/users", r#"{"name":"n","displayName":"N"}"#))
         .await
         .unwrap();

      assert_eq!(body_json(response).await["id"], json!(expected_id));
   }
}

#[tokio::test]
async fn test_空のストアでは最初のidが1になる() {
   let app = build_app(
      Arc::new(InMemoryUserRepository::default()),
      Arc::new(StaticProductRepository),
   );

   let response = app
      .oneshot(post_json("/api/users", r#"{"name":"first"}"#))
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::CREATED);
   assert_eq!(body_json(response).await, json!({"id": 1, "name": "first"}));
}

#[tokio::test]
async fn test_属性を持たない作成済みユーザーは絞り込みに一致しない() {
   let app = test_app();
   app.clone()
      .oneshot(post_json("/api/users", r#"{"role":"guest"}"#))
      .await
      .unwrap();

   let response = app
      .oneshot(get("/api/users?filter=name&value=j"))
      .await
      .unwrap();

   assert_eq!(names(&body_json(response).await), vec!["john", "jane", "james", "jill"]);
}

#[rstest]
#[case("[1,2,3]")]
#[case("not json")]
#[tokio::test]
async fn test_オブジェクトでないボディは拒否されストアは変わらない(#[case] body: &str) {
   let app = test_app();

   let response = app
      .clone()
      .oneshot(post_json("/api/users", body))
      .await
      .unwrap();

   assert!(response.status().is_client_error());

   let listed = app.oneshot(get("/api/users")).await.unwrap();
   assert_eq!(body_json(listed).await.as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_商品一覧は固定の3件を返す() {
   let response = test_app().oneshot(get("/api/products")).await.unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(
      body_json(response).await,
      json!([
         {"id": 1, "name": "Bat", "price": 100},
         {"id": 2, "name": "Glove", "price": 50},
         {"id": 3, "name": "Ball", "price": 20},
      ])
   );
}

#[tokio::test]
async fn test_レスポンスにx_request_idヘッダーが含まれる() {
   let response = test_app().oneshot(get("/api/users")).await.unwrap();

   let request_id = response
      .headers()
      .get("x-request-id")
      .unwrap()
      .to_str()
      .unwrap();
   let parsed = uuid::Uuid::parse_str(request_id).unwrap();
   assert_eq!(parsed.get_version_num(), 7, "自動生成の Request ID は UUID v7 であること");
}

#[tokio::test]
async fn test_クライアント提供のx_request_idがそのまま返される() {
   let request = Request::builder()
      .uri("/")
      .header("x-request-id", "client-provided-id-123")
      .body(Body::empty())
      .unwrap();

   let response = test_app().oneshot(request).await.unwrap();

   assert_eq!(
      response
         .headers()
         .get("x-request-id")
         .unwrap()
         .to_str()
         .unwrap(),
      "client-provided-id-123"
   );
}

#[tokio::test]
async fn test_初期ユーザーはすべてidで取得でき一覧と同じ内容になる() {
   let app = test_app();
   let listed = body_json(app.clone().oneshot(get("/api/users")).await.unwrap()).await;

   for user in listed.as_array().unwrap() {
      let uri = format!("/api/users/{}", user["id"]);
      let fetched = app.clone().oneshot(get(&uri)).await.unwrap();

      assert_eq!(fetched.status(), StatusCode::OK);
      assert_eq!(&body_json(fetched).await, user);
   }
}

#[tokio::test]
async fn test_joで絞り込むとjohnだけを返す() {
   let response = test_app()
      .oneshot(get("/api/users?filter=name&value=jo"))
      .await
      .unwrap();

   assert_eq!(names(&body_json(response).await), vec!["john"]);
}

#[tokio::test]
async fn test_参照系のリクエストはストアを変更しない() {
   let app = test_app();
   let before = body_json(app.clone().oneshot(get("/api/users")).await.unwrap()).await;

   for uri in ["/api/users?filter=name&value=j", "/api/users/3", "/api/users/abc", "/api/users/999"] {
      app.clone().oneshot(get(uri)).await.unwrap();
   }

   let after = body_json(app.oneshot(get("/api/users")).await.unwrap()).await;
   assert_eq!(after, before);
}

#[tokio::test]
async fn test_商品一覧はユーザー操作の影響を受けない() {
   let app = test_app();
   let before = body_json(app.clone().oneshot(get("/api/products")).await.unwrap()).await;

   app.clone()
      .oneshot(post_json("/api/users", r#"{"name":"x","displayName":"X"}"#))
      .await
      .unwrap();

   let after = body_json(app.oneshot(get("/api/products")).await.unwrap()).await;
   assert_eq!(after, before);
}
