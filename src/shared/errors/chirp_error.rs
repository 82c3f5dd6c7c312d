use axum::{http::StatusCode, Json};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::errors::AuthError;

/// Chirp 관련 에러
/// Chirp-related errors
#[derive(Error, Debug)]
pub enum ChirpError {
    /// 본문이 너무 김
    /// Body longer than the chirp limit
    #[error("Chirp is too long")]
    TooLong { length: usize },

    /// 잘못된 chirp id
    #[error("Invalid chirp ID: {0}")]
    InvalidId(String),

    /// 잘못된 쿼리 파라미터
    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    /// Chirp을 찾을 수 없음
    /// Chirp not found
    #[error("Chirp not found: id={id}")]
    NotFound { id: Uuid },

    /// 인증/권한 에러
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// ChirpError를 HTTP 응답으로 변환
impl From<ChirpError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: ChirpError) -> Self {
        let (status, message) = match err {
            ChirpError::Auth(auth) => return auth.into(),
            ChirpError::TooLong { .. }
            | ChirpError::InvalidId(_)
            | ChirpError::InvalidQuery(_) => (StatusCode::BAD_REQUEST, err.to_string()),
            ChirpError::NotFound { .. } => (StatusCode::NOT_FOUND, "Chirp not found".to_string()),
            ChirpError::DatabaseError(_) => {
                tracing::error!(error = %err, "chirp request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message })))
    }
}
