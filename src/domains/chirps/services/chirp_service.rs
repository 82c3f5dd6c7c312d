use std::sync::Arc;

use uuid::Uuid;

use crate::domains::auth::services::require_owner;
use crate::domains::chirps::models::{Chirp, CreateChirpRequest, ListChirpsQuery, SortOrder, MAX_CHIRP_LENGTH};
use crate::domains::chirps::services::clean_body;
use crate::shared::database::ChirpStore;
use crate::shared::errors::ChirpError;

// Chirp 서비스
#[derive(Clone)]
pub struct ChirpService {
    chirps: Arc<dyn ChirpStore>,
}

impl ChirpService {
    pub fn new(chirps: Arc<dyn ChirpStore>) -> Self {
        Self { chirps }
    }

    /// 본문 검증 (길이 확인 → 금지어 치환), 저장하지 않음
    /// Check the length limit and return the cleaned body
    pub fn validate_body(&self, body: &str) -> Result<String, ChirpError> {
        // 길이는 바이트가 아니라 문자 수
        let length = body.chars().count();
        if length > MAX_CHIRP_LENGTH {
            return Err(ChirpError::TooLong { length });
        }

        Ok(clean_body(body))
    }

    /// Chirp 작성 (검증 → 저장)
    pub async fn create_chirp(&self, user_id: Uuid, request: CreateChirpRequest) -> Result<Chirp, ChirpError> {
        let body = self.validate_body(&request.body)?;

        let chirp = self
            .chirps
            .create_chirp(user_id, &body)
            .await
            .map_err(|e| ChirpError::DatabaseError(format!("Failed to create chirp: {:#}", e)))?;

        tracing::debug!(chirp_id = %chirp.id, user_id = %user_id, "chirp created");
        Ok(chirp)
    }

    /// Chirp 목록 조회 (작성자 필터, created_at 정렬)
    pub async fn list_chirps(&self, query: ListChirpsQuery) -> Result<Vec<Chirp>, ChirpError> {
        let author_id = query
            .author_id
            .as_deref()
            .map(|raw| {
                Uuid::parse_str(raw.trim())
                    .map_err(|_| ChirpError::InvalidQuery(format!("author_id is not a valid UUID: {raw}")))
            })
            .transpose()?;

        let sort = match query.sort.as_deref() {
            Some(raw) => raw.parse::<SortOrder>().map_err(ChirpError::InvalidQuery)?,
            None => SortOrder::default(),
        };

        let mut chirps = self
            .chirps
            .list_chirps(author_id)
            .await
            .map_err(|e| ChirpError::DatabaseError(format!("Failed to list chirps: {:#}", e)))?;

        if sort == SortOrder::Desc {
            chirps.reverse();
        }

        Ok(chirps)
    }

    /// Chirp 단건 조회
    pub async fn get_chirp(&self, chirp_id: &str) -> Result<Chirp, ChirpError> {
        let id = Self::parse_id(chirp_id)?;

        self.chirps
            .get_chirp(id)
            .await
            .map_err(|e| ChirpError::DatabaseError(format!("Failed to fetch chirp: {:#}", e)))?
            .ok_or(ChirpError::NotFound { id })
    }

    /// Chirp 삭제 (작성자만)
    pub async fn delete_chirp(&self, user_id: Uuid, chirp_id: &str) -> Result<(), ChirpError> {
        let chirp = self.get_chirp(chirp_id).await?;

        require_owner(chirp.user_id, user_id)?;

        let deleted = self
            .chirps
            .delete_chirp(chirp.id)
            .await
            .map_err(|e| ChirpError::DatabaseError(format!("Failed to delete chirp: {:#}", e)))?;

        // 조회와 삭제 사이에 이미 지워진 경우
        if !deleted {
            return Err(ChirpError::NotFound { id: chirp.id });
        }

        tracing::debug!(chirp_id = %chirp.id, user_id = %user_id, "chirp deleted");
        Ok(())
    }

    fn parse_id(raw: &str) -> Result<Uuid, ChirpError> {
        Uuid::parse_str(raw).map_err(|_| ChirpError::InvalidId(raw.to_string()))
    }
}
