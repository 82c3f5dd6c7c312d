use crate::domains::billing::models::WebhookRequest;
use crate::shared::errors::AuthError;
use crate::shared::middleware::auth::ApiKeyCaller;
use crate::shared::middleware::json_body::JsonBody;
use crate::shared::services::AppState;
use axum::{extract::State, http::StatusCode, Json};

// Polka 웹훅 핸들러
#[utoipa::path(
    post,
    path = "/api/polka/webhooks",
    request_body = WebhookRequest,
    responses(
        (status = 204, description = "Event handled or ignored"),
        (status = 401, description = "Invalid API key"),
        (status = 404, description = "User not found")
    ),
    security(
        ("ApiKeyAuth" = [])
    ),
    tag = "Billing"
)]
pub async fn polka_webhook(
    State(app_state): State<AppState>,
    _caller: ApiKeyCaller,
    JsonBody(request): JsonBody<WebhookRequest>,
) -> Result<StatusCode, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .billing_service
        .handle_webhook(request)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(StatusCode::NO_CONTENT)
}
