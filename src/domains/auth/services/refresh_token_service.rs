// src/domains/auth/services/refresh_token_service.rs
use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Uuid;

use crate::domains::auth::models::{IssuedRefreshToken, RefreshTokenState};
use crate::shared::database::RefreshTokenStore;
use crate::shared::errors::{AuthError, SessionFailure};

/// Refresh Token 랜덤 바이트 수 (hex 인코딩 후 64자)
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Refresh Token 수명 (일)
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 60;

/// Refresh Token 서비스
/// Issues, resolves and revokes opaque refresh tokens. Holds no state of its
/// own; every read and write goes to the store.
#[derive(Clone)]
pub struct RefreshTokenService {
    store: Arc<dyn RefreshTokenStore>,
}

impl RefreshTokenService {
    pub fn new(store: Arc<dyn RefreshTokenStore>) -> Self {
        Self { store }
    }

    /// Refresh Token 값 생성 (OS RNG 32바이트 → 소문자 hex 64자)
    /// Generate a token value: 32 bytes from the OS RNG as 64 lowercase hex chars
    pub fn generate_token() -> Result<String, AuthError> {
        Self::generate_token_from(&mut OsRng)
    }

    // 난수 실패는 해시 실패와 같은 분류 (500, 비밀 생성 불가)
    fn generate_token_from<R: RngCore + ?Sized>(rng: &mut R) -> Result<String, AuthError> {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| AuthError::HashingFailed(format!("Failed to generate refresh token: {}", e)))?;

        Ok(hex::encode(bytes))
    }

    /// Refresh Token 발급 및 저장
    /// Issue and persist a refresh token. A rejected write is returned as-is;
    /// retrying with a new value is the caller's decision.
    pub async fn issue(&self, user_id: Uuid) -> Result<IssuedRefreshToken, AuthError> {
        let token = Self::generate_token()?;
        let expires_at = Utc::now() + Duration::days(REFRESH_TOKEN_TTL_DAYS);

        self.store
            .store_refresh_token(&token, user_id, expires_at)
            .await
            .map_err(|e| AuthError::Persistence(format!("Failed to store refresh token: {:#}", e)))?;

        Ok(IssuedRefreshToken { token, expires_at })
    }

    /// Refresh Token 확인 → 사용자 ID
    /// Resolve an active refresh token to its owner
    pub async fn resolve(&self, token: &str) -> Result<Uuid, AuthError> {
        let record = self
            .store
            .lookup_refresh_token(token)
            .await
            .map_err(|e| AuthError::Persistence(format!("Failed to find refresh token: {:#}", e)))?;

        let failure = match record {
            None => SessionFailure::NotFound,
            Some(record) => match record.state_at(Utc::now()) {
                RefreshTokenState::Active => return Ok(record.user_id),
                RefreshTokenState::Expired => SessionFailure::Expired,
                RefreshTokenState::Revoked => SessionFailure::Revoked,
            },
        };

        tracing::debug!(reason = %failure, "refresh token rejected");
        Err(AuthError::SessionInvalid(failure))
    }

    /// Refresh Token 무효화 (멱등)
    /// Revoke a refresh token. Revoking twice succeeds; an unknown token does not.
    pub async fn revoke(&self, token: &str) -> Result<(), AuthError> {
        let found = self
            .store
            .mark_revoked(token, Utc::now())
            .await
            .map_err(|e| AuthError::Persistence(format!("Failed to revoke refresh token: {:#}", e)))?;

        if !found {
            tracing::debug!("revoke requested for unknown refresh token");
            return Err(AuthError::SessionInvalid(SessionFailure::NotFound));
        }

        Ok(())
    }
}
