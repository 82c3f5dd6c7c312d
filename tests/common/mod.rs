// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 모든 통합 테스트에서 공통으로 사용하는 셋업 함수와 요청 헬퍼 제공
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let app = setup_test();
//     let session = signup_and_login(&app, "walt@breakingbad.com", "123456").await;
//     // 테스트 코드...
// }
// ```
//
// 저장소는 in-memory 이므로 테스트마다 독립적이고 DB가 필요 없습니다.
// =====================================================
#![allow(dead_code)]

use std::collections::HashMap;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use chirpy_server::routes::create_app;
use chirpy_server::shared::config::AppConfig;
use chirpy_server::shared::database::Storage;
use chirpy_server::shared::services::AppState;

// 테스트용 상수
pub const TEST_JWT_SECRET: &str = "integration-test-secret";
pub const TEST_POLKA_KEY: &str = "f271c81ff7084ee5b99a5091b42d486e";
pub const TEST_PASSWORD: &str = "04234";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).expect("response body is not UTF-8")
    }

    pub fn error_message(&self) -> String {
        self.json()["error"].as_str().unwrap_or_default().to_string()
    }
}

/// 로그인 결과 (access token + refresh token)
pub struct Session {
    pub user_id: Uuid,
    pub token: String,
    pub refresh_token: String,
}

pub fn test_config(platform: &str) -> AppConfig {
    let vars: HashMap<&str, String> = HashMap::from([
        ("JWT_SECRET", TEST_JWT_SECRET.to_string()),
        ("POLKA_KEY", TEST_POLKA_KEY.to_string()),
        ("PLATFORM", platform.to_string()),
        ("FILESERVER_ROOT", env!("CARGO_MANIFEST_DIR").to_string()),
    ]);

    AppConfig::from_lookup(|key| vars.get(key).cloned()).expect("test config is valid")
}

/// 테스트 전 초기화 (PLATFORM=dev)
pub fn setup_test() -> TestApp {
    setup_test_on("dev")
}

/// 지정한 PLATFORM 으로 초기화
pub fn setup_test_on(platform: &str) -> TestApp {
    let state = AppState::new(test_config(platform), Storage::in_memory());
    let router = create_app(state.clone());
    TestApp { router, state }
}

pub async fn send(app: &TestApp, request: Request<Body>) -> TestResponse {
    let response = app
        .router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");

    TestResponse {
        status,
        content_type,
        body,
    }
}

/// 요청 생성. `authorization` 은 헤더 값 그대로 (예: "Bearer abc")
pub fn request(method: Method, uri: &str, authorization: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }

    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("valid request"),
        None => builder.body(Body::empty()).expect("valid request"),
    }
}

/// 본문을 문자열 그대로 보내는 요청 (깨진 JSON, Content-Type 누락 등)
pub fn raw_request(
    method: Method,
    uri: &str,
    authorization: Option<&str>,
    content_type: Option<&str>,
    body: &str,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    if let Some(value) = content_type {
        builder = builder.header(header::CONTENT_TYPE, value);
    }

    builder.body(Body::from(body.to_string())).expect("valid request")
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub async fn create_user(app: &TestApp, email: &str, password: &str) -> TestResponse {
    send(
        app,
        request(
            Method::POST,
            "/api/users",
            None,
            Some(serde_json::json!({ "email": email, "password": password })),
        ),
    )
    .await
}

pub async fn login(app: &TestApp, email: &str, password: &str) -> TestResponse {
    send(
        app,
        request(
            Method::POST,
            "/api/login",
            None,
            Some(serde_json::json!({ "email": email, "password": password })),
        ),
    )
    .await
}

/// 회원가입 + 로그인
pub async fn signup_and_login(app: &TestApp, email: &str, password: &str) -> Session {
    let created = create_user(app, email, password).await;
    assert_eq!(created.status, StatusCode::CREATED);

    let response = login(app, email, password).await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    Session {
        user_id: body["id"].as_str().and_then(|id| Uuid::parse_str(id).ok()).expect("login returns id"),
        token: body["token"].as_str().expect("login returns token").to_string(),
        refresh_token: body["refresh_token"]
            .as_str()
            .expect("login returns refresh_token")
            .to_string(),
    }
}

pub async fn create_chirp(app: &TestApp, token: &str, body: &str) -> TestResponse {
    send(
        app,
        request(
            Method::POST,
            "/api/chirps",
            Some(&bearer(token)),
            Some(serde_json::json!({ "body": body })),
        ),
    )
    .await
}
