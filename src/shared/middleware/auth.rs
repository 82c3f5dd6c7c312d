use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    Json,
};
use uuid::Uuid;

use crate::domains::auth::services::{extract_api_key, extract_bearer_token, require_api_key};
use crate::shared::errors::AuthError;
use crate::shared::services::AppState;

/// 인증된 사용자 정보 (JWT 토큰에서 추출)
/// Authenticated user information (extracted from JWT token)
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// AuthenticatedUser를 Axum Extractor로 구현
///
/// 사용법:
/// ```ignore
/// pub async fn create_chirp(
///     State(app_state): State<AppState>,
///     authenticated_user: AuthenticatedUser,  // <- 이렇게 사용!
///     JsonBody(request): JsonBody<CreateChirpRequest>,
/// ) -> Result<...> {
///     let user_id = authenticated_user.user_id;
///     // ...
/// }
/// ```
#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. "Authorization: Bearer <token>" 에서 토큰 추출
        let token = extract_bearer_token(&parts.headers)
            .map_err(|e: AuthError| -> Self::Rejection { e.into() })?;

        // 2. JWT Service로 토큰 검증 (AppState에서 가져옴)
        let user_id = state
            .auth_state
            .jwt_service
            .verify_access_token(&token)
            .map_err(|e: AuthError| -> Self::Rejection { e.into() })?;

        // 3. AuthenticatedUser 반환
        Ok(AuthenticatedUser { user_id })
    }
}

/// 사전 공유 키로 인증된 서버 간 호출자 (billing webhook)
/// Server-to-server caller that presented the configured `ApiKey`.
/// Runs before the body is read, so a bad key never reaches the payload.
#[derive(Debug, Clone, Copy)]
pub struct ApiKeyCaller;

#[async_trait]
impl FromRequestParts<AppState> for ApiKeyCaller {
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let key = extract_api_key(&parts.headers)
            .map_err(|e: AuthError| -> Self::Rejection {
                tracing::debug!(error = %e, "webhook caller without api key");
                AuthError::InvalidApiKey.into()
            })?;

        require_api_key(&key, state.config.polka_key.as_deref())
            .map_err(|e: AuthError| -> Self::Rejection { e.into() })?;

        Ok(ApiKeyCaller)
    }
}
