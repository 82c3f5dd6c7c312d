use std::fmt;

use axum::{http::StatusCode, Json};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Refresh Token 거부 사유 (내부 진단용)
/// Why a refresh token was rejected. Logged, never sent to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFailure {
    /// 저장소에 없음
    NotFound,
    /// 만료됨
    Expired,
    /// 무효화됨
    Revoked,
}

impl fmt::Display for SessionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SessionFailure::NotFound => "not found",
            SessionFailure::Expired => "expired",
            SessionFailure::Revoked => "revoked",
        };
        f.write_str(reason)
    }
}

/// 인증 관련 에러
/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// 이메일이 이미 존재함
    /// Email already exists
    #[error("Email already exists: {email}")]
    EmailAlreadyExists { email: String },

    /// 요청 값 검증 실패
    /// Request validation failed
    #[error("{0}")]
    Validation(String),

    /// 요청 본문을 JSON으로 읽을 수 없음
    /// Request body missing, not JSON, or not the expected shape
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    /// Authorization 헤더 없음
    /// Authorization header absent
    #[error("Authorization header not found")]
    MissingCredential,

    /// Authorization 헤더 형식 오류
    /// Authorization header present but not in the expected scheme
    #[error("Authorization header is malformed")]
    MalformedCredential,

    /// 잘못된 또는 만료된 Access Token
    /// Invalid or expired access token
    #[error("Invalid or expired token")]
    InvalidToken,

    /// 비밀번호 불일치 (이메일 없음 포함)
    /// Password does not match, or the email is unknown
    #[error("Incorrect email or password")]
    PasswordMismatch,

    /// 저장된 해시 형식 오류
    /// Stored hash is not a PHC string
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),

    /// 해싱 / 난수 생성 실패
    /// Password hashing or the OS random source failed
    #[error("Hashing or randomness failure: {0}")]
    HashingFailed(String),

    /// Refresh Token 세션 무효
    /// Refresh token session is not active
    #[error("Refresh token rejected: {0}")]
    SessionInvalid(SessionFailure),

    /// 잘못된 API 키
    /// API key missing from config or does not match
    #[error("Invalid API key")]
    InvalidApiKey,

    /// 권한 없음
    /// Authenticated but not allowed
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 사용자를 찾을 수 없음
    /// User not found
    #[error("User not found: id={id}")]
    UserNotFound { id: Uuid },

    /// 저장소 에러
    /// Persistence collaborator failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::EmailAlreadyExists { .. }
            | AuthError::Validation(_)
            | AuthError::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            AuthError::MissingCredential
            | AuthError::MalformedCredential
            | AuthError::InvalidToken
            | AuthError::PasswordMismatch
            | AuthError::SessionInvalid(_)
            | AuthError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden(_) => StatusCode::FORBIDDEN,
            AuthError::UserNotFound { .. } => StatusCode::NOT_FOUND,
            AuthError::MalformedHash(_)
            | AuthError::HashingFailed(_)
            | AuthError::Persistence(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 클라이언트에 노출되는 메시지
    /// Message safe to return to the caller. Credential and session failures
    /// are collapsed so the response does not reveal which check failed.
    pub fn client_message(&self) -> String {
        match self {
            AuthError::MissingCredential
            | AuthError::MalformedCredential
            | AuthError::InvalidToken => "Unauthenticated".to_string(),
            AuthError::PasswordMismatch => "Incorrect email or password".to_string(),
            AuthError::SessionInvalid(_) => "Session invalid".to_string(),
            AuthError::InvalidApiKey => "Invalid API key".to_string(),
            AuthError::InvalidRequestBody(_) => "Invalid request".to_string(),
            AuthError::Forbidden(_) => "Forbidden".to_string(),
            AuthError::UserNotFound { .. } => "User not found".to_string(),
            AuthError::EmailAlreadyExists { .. } | AuthError::Validation(_) => self.to_string(),
            AuthError::MalformedHash(_)
            | AuthError::HashingFailed(_)
            | AuthError::Persistence(_)
            | AuthError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

/// AuthError를 HTTP 응답으로 변환
impl From<AuthError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AuthError) -> Self {
        let status = err.status_code();

        if status.is_server_error() {
            tracing::error!(error = %err, "request failed");
        } else {
            tracing::debug!(error = %err, status = status.as_u16(), "request rejected");
        }

        (status, Json(json!({ "error": err.client_message() })))
    }
}
