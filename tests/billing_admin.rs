// =====================================================
// 결제 웹훅 / 운영 API 통합 테스트
// =====================================================

mod common;

use axum::http::{Method, StatusCode};
use common::*;
use serde_json::json;
use uuid::Uuid;

fn api_key(key: &str) -> String {
    format!("ApiKey {key}")
}

fn upgrade_event(user_id: Uuid) -> serde_json::Value {
    json!({ "event": "user.upgraded", "data": { "user_id": user_id } })
}

#[tokio::test]
async fn test_webhook_upgrades_user() {
    let app = setup_test();
    let session = signup_and_login(&app, "walt@breakingbad.com", TEST_PASSWORD).await;

    let response = send(
        &app,
        request(
            Method::POST,
            "/api/polka/webhooks",
            Some(&api_key(TEST_POLKA_KEY)),
            Some(upgrade_event(session.user_id)),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let body = login(&app, "walt@breakingbad.com", TEST_PASSWORD).await.json();
    assert_eq!(body["is_chirpy_red"], true);
}

#[tokio::test]
async fn test_webhook_rejects_bad_keys() {
    let app = setup_test();
    let session = signup_and_login(&app, "walt@breakingbad.com", TEST_PASSWORD).await;
    let wrong_key = api_key("wrong");
    let bearer_key = bearer(TEST_POLKA_KEY);

    for authorization in [None, Some(wrong_key.as_str()), Some(bearer_key.as_str())] {
        let response = send(
            &app,
            request(
                Method::POST,
                "/api/polka/webhooks",
                authorization,
                Some(upgrade_event(session.user_id)),
            ),
        )
        .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }

    // 거부된 호출은 아무것도 바꾸지 않음
    let body = login(&app, "walt@breakingbad.com", TEST_PASSWORD).await.json();
    assert_eq!(body["is_chirpy_red"], false);
}

#[tokio::test]
async fn test_webhook_key_is_checked_before_body() {
    let app = setup_test();

    let response = send(
        &app,
        request(Method::POST, "/api/polka/webhooks", Some(&api_key("wrong")), Some(json!({ "nope": 1 }))),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_webhook_malformed_body_with_valid_key() {
    let app = setup_test();
    let key = api_key(TEST_POLKA_KEY);

    let bodies = [
        json!({ "event": "user.upgraded", "data": { "user_id": "nope" } }),
        json!({ "event": "user.upgraded" }),
        json!({ "event": 7, "data": {} }),
    ];
    for body in bodies {
        let response = send(&app, request(Method::POST, "/api/polka/webhooks", Some(&key), Some(body))).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.content_type.as_deref(), Some("application/json"));
        assert_eq!(response.error_message(), "Invalid request");
    }
}

#[tokio::test]
async fn test_webhook_ignores_other_events() {
    let app = setup_test();
    let session = signup_and_login(&app, "walt@breakingbad.com", TEST_PASSWORD).await;

    let response = send(
        &app,
        request(
            Method::POST,
            "/api/polka/webhooks",
            Some(&api_key(TEST_POLKA_KEY)),
            Some(json!({ "event": "user.payment_failed", "data": { "user_id": session.user_id } })),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let body = login(&app, "walt@breakingbad.com", TEST_PASSWORD).await.json();
    assert_eq!(body["is_chirpy_red"], false);
}

#[tokio::test]
async fn test_webhook_unknown_user() {
    let app = setup_test();

    let response = send(
        &app,
        request(
            Method::POST,
            "/api/polka/webhooks",
            Some(&api_key(TEST_POLKA_KEY)),
            Some(upgrade_event(Uuid::new_v4())),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_healthz() {
    let app = setup_test();

    let response = send(&app, request(Method::GET, "/api/healthz", None, None)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "OK");
    assert!(response.content_type.as_deref().unwrap_or_default().starts_with("text/plain"));
}

#[tokio::test]
async fn test_metrics_count_fileserver_hits() {
    let app = setup_test();

    for _ in 0..3 {
        send(&app, request(Method::GET, "/app/index.html", None, None)).await;
    }
    // API 요청은 집계하지 않음
    send(&app, request(Method::GET, "/api/healthz", None, None)).await;

    let response = send(&app, request(Method::GET, "/admin/metrics", None, None)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type.as_deref().unwrap_or_default().starts_with("text/html"));
    assert!(response.text().contains("Chirpy has been visited 3 times!"));
}

#[tokio::test]
async fn test_reset_forbidden_outside_dev() {
    let app = setup_test_on("prod");
    create_user(&app, "walt@breakingbad.com", TEST_PASSWORD).await;

    let response = send(&app, request(Method::POST, "/admin/reset", None, None)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(login(&app, "walt@breakingbad.com", TEST_PASSWORD).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_reset_on_dev() {
    let app = setup_test();
    let session = signup_and_login(&app, "walt@breakingbad.com", TEST_PASSWORD).await;
    send(&app, request(Method::GET, "/app/index.html", None, None)).await;

    let response = send(&app, request(Method::POST, "/admin/reset", None, None)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "Hits counter reset to 0\n");
    assert_eq!(app.state.hits.get(), 0);

    // 사용자와 refresh token 모두 삭제
    assert_eq!(login(&app, "walt@breakingbad.com", TEST_PASSWORD).await.status, StatusCode::UNAUTHORIZED);
    let response = send(
        &app,
        request(Method::POST, "/api/refresh", Some(&bearer(&session.refresh_token)), None),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
