use crate::domains::chirps::models::{ChirpResponse, CreateChirpRequest, ListChirpsQuery, ValidateChirpResponse};
use crate::shared::errors::ChirpError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::middleware::json_body::JsonBody;
use crate::shared::services::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

// Chirp 작성 핸들러
#[utoipa::path(
    post,
    path = "/api/chirps",
    request_body = CreateChirpRequest,
    responses(
        (status = 201, description = "Chirp created", body = ChirpResponse),
        (status = 400, description = "Chirp is too long"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Chirps"
)]
pub async fn create_chirp(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    JsonBody(request): JsonBody<CreateChirpRequest>,
) -> Result<(StatusCode, Json<ChirpResponse>), (StatusCode, Json<serde_json::Value>)> {
    let chirp = app_state
        .chirp_state
        .chirp_service
        .create_chirp(authenticated_user.user_id, request)
        .await
        .map_err(|e: ChirpError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((StatusCode::CREATED, Json(chirp.into())))
}

// Chirp 목록 조회 핸들러
#[utoipa::path(
    get,
    path = "/api/chirps",
    params(
        ("author_id" = Option<String>, Query, description = "Only chirps by this author (UUID)"),
        ("sort" = Option<String>, Query, description = "asc (default) or desc, by created_at")
    ),
    responses(
        (status = 200, description = "Chirps", body = Vec<ChirpResponse>),
        (status = 400, description = "Invalid query parameter"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chirps"
)]
pub async fn list_chirps(
    State(app_state): State<AppState>,
    Query(query): Query<ListChirpsQuery>,
) -> Result<Json<Vec<ChirpResponse>>, (StatusCode, Json<serde_json::Value>)> {
    let chirps = app_state
        .chirp_state
        .chirp_service
        .list_chirps(query)
        .await
        .map_err(|e: ChirpError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(chirps.into_iter().map(ChirpResponse::from).collect()))
}

// Chirp 단건 조회 핸들러
#[utoipa::path(
    get,
    path = "/api/chirps/{chirp_id}",
    params(
        ("chirp_id" = String, Path, description = "Chirp ID (UUID)")
    ),
    responses(
        (status = 200, description = "Chirp", body = ChirpResponse),
        (status = 400, description = "Invalid chirp ID"),
        (status = 404, description = "Chirp not found")
    ),
    tag = "Chirps"
)]
pub async fn get_chirp(
    State(app_state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<Json<ChirpResponse>, (StatusCode, Json<serde_json::Value>)> {
    let chirp = app_state
        .chirp_state
        .chirp_service
        .get_chirp(&chirp_id)
        .await
        .map_err(|e: ChirpError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(chirp.into()))
}

// Chirp 삭제 핸들러 (작성자만)
#[utoipa::path(
    delete,
    path = "/api/chirps/{chirp_id}",
    params(
        ("chirp_id" = String, Path, description = "Chirp ID (UUID)")
    ),
    responses(
        (status = 204, description = "Chirp deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Chirp not found")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Chirps"
)]
pub async fn delete_chirp(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(chirp_id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .chirp_state
        .chirp_service
        .delete_chirp(authenticated_user.user_id, &chirp_id)
        .await
        .map_err(|e: ChirpError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(StatusCode::NO_CONTENT)
}

// 본문 검증 핸들러 (저장 없음, 인증 불필요)
#[utoipa::path(
    post,
    path = "/api/validate_chirp",
    request_body = CreateChirpRequest,
    responses(
        (status = 200, description = "Cleaned body", body = ValidateChirpResponse),
        (status = 400, description = "Chirp is too long or invalid request")
    ),
    tag = "Chirps"
)]
pub async fn validate_chirp(
    State(app_state): State<AppState>,
    JsonBody(request): JsonBody<CreateChirpRequest>,
) -> Result<Json<ValidateChirpResponse>, (StatusCode, Json<serde_json::Value>)> {
    let cleaned_body = app_state
        .chirp_state
        .chirp_service
        .validate_body(&request.body)
        .map_err(|e: ChirpError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(ValidateChirpResponse { cleaned_body }))
}
