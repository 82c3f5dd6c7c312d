use crate::domains::admin::services::RESET_MESSAGE;
use crate::shared::errors::AuthError;
use crate::shared::services::AppState;
use axum::{extract::State, http::StatusCode, response::Html, Json};

// 헬스 체크
#[utoipa::path(
    get,
    path = "/api/healthz",
    responses(
        (status = 200, description = "Server is up", body = String, content_type = "text/plain")
    ),
    tag = "Admin"
)]
pub async fn healthz() -> &'static str {
    "OK"
}

// 방문 수 페이지
#[utoipa::path(
    get,
    path = "/admin/metrics",
    responses(
        (status = 200, description = "Hit count page", body = String, content_type = "text/html")
    ),
    tag = "Admin"
)]
pub async fn metrics(State(app_state): State<AppState>) -> Html<String> {
    Html(app_state.admin_service.metrics_page())
}

// 개발 환경 초기화
#[utoipa::path(
    post,
    path = "/admin/reset",
    responses(
        (status = 200, description = "Users deleted and hit counter reset", body = String, content_type = "text/plain"),
        (status = 403, description = "Not a dev platform"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Admin"
)]
pub async fn reset(
    State(app_state): State<AppState>,
) -> Result<&'static str, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .admin_service
        .reset()
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(RESET_MESSAGE)
}
