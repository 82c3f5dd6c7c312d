use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Chirp 최대 길이 (문자 수)
/// Maximum chirp length, in characters
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Chirp 모델 (DB 저장용)
/// Chirp model (for database storage)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chirp {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    /// 작성자 (소유자)
    pub user_id: Uuid,
}

// Chirp 작성 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = CreateChirpRequest)]
pub struct CreateChirpRequest {
    #[schema(example = "I had something interesting for breakfast")]
    pub body: String,
}

// Chirp 응답 모델
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = ChirpResponse)]
pub struct ChirpResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

impl From<Chirp> for ChirpResponse {
    fn from(chirp: Chirp) -> Self {
        Self {
            id: chirp.id,
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
            body: chirp.body,
            user_id: chirp.user_id,
        }
    }
}

// 본문 검증 응답 모델 (저장하지 않음)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = ValidateChirpResponse)]
pub struct ValidateChirpResponse {
    #[schema(example = "I had a **** breakfast")]
    pub cleaned_body: String,
}

// 목록 조회 쿼리 (원본 문자열, 서비스에서 검증)
#[derive(Debug, Default, Deserialize)]
pub struct ListChirpsQuery {
    pub author_id: Option<String>,
    pub sort: Option<String>,
}

/// 정렬 순서 (created_at 기준)
/// Sort order over `created_at`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("sort must be 'asc' or 'desc', got '{other}'")),
        }
    }
}
