// src/domains/auth/services/jwt_service.rs
use chrono::Duration;
use jsonwebtoken::{decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domains::auth::models::jwt::Claims;
use crate::shared::errors::AuthError;

/// Access Token 발급자
pub const ACCESS_TOKEN_ISSUER: &str = "chirpy";

/// 허용하는 유일한 서명 알고리즘
/// The only accepted signing algorithm. The `alg` in an incoming header is
/// compared against this and never used to pick a key.
pub const ACCESS_TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT 서비스
/// JWT Service for access token generation and verification
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_token_ttl: Duration,
}

impl JwtService {
    /// JWT Service 생성
    /// Create JWT Service
    pub fn new(secret: &str, access_token_ttl: Duration) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(ACCESS_TOKEN_ALGORITHM);
        // 만료 판정은 서버 시계 그대로 (유예 없음)
        validation.leeway = 0;
        validation.set_issuer(&[ACCESS_TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            encoding_key,
            decoding_key,
            validation,
            access_token_ttl,
        }
    }

    /// Access Token 발급 (설정된 수명)
    /// Generate Access Token with the configured lifetime
    pub fn issue_access_token(&self, user_id: Uuid) -> Result<String, AuthError> {
        self.issue_access_token_with_ttl(user_id, self.access_token_ttl)
    }

    /// Access Token 발급 (수명 지정)
    /// Generate Access Token with an explicit lifetime. A negative ttl yields
    /// a token that never verifies.
    pub fn issue_access_token_with_ttl(&self, user_id: Uuid, ttl: Duration) -> Result<String, AuthError> {
        let claims = Claims::new(ACCESS_TOKEN_ISSUER, user_id, ttl);

        encode(&Header::new(ACCESS_TOKEN_ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to generate access token: {}", e)))
    }

    /// Access Token 검증
    /// Verify Access Token and return the subject's user id
    pub fn verify_access_token(&self, token: &str) -> Result<Uuid, AuthError> {
        // 1. 헤더의 알고리즘 확인 (서명 검증 전에)
        let header = decode_header(token).map_err(|e| {
            tracing::debug!(error = %e, "access token header rejected");
            AuthError::InvalidToken
        })?;

        if header.alg != ACCESS_TOKEN_ALGORITHM {
            tracing::warn!(alg = ?header.alg, "access token with unexpected algorithm");
            return Err(AuthError::InvalidToken);
        }

        // 2. 서명 + exp + iss 검증
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "access token rejected");
                AuthError::InvalidToken
            })?;

        // 3. subject는 UUID여야 함
        Uuid::parse_str(&token_data.claims.sub).map_err(|_| {
            tracing::debug!("access token subject is not a user id");
            AuthError::InvalidToken
        })
    }
}
