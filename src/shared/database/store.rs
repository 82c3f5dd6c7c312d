// 저장소 인터페이스
// Persistence contracts consumed by the services.
//
// 서비스는 이 trait만 알고, 뒤에 있는 엔진(PostgreSQL / in-memory)은 모릅니다.
// Reads must observe the most recent completed write for the same key.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domains::auth::models::{RefreshToken, User};
use crate::domains::chirps::models::Chirp;
use crate::shared::database::{ChirpRepository, Database, MemoryStore, RefreshTokenRepository, UserRepository};

/// PostgreSQL unique_violation SQLSTATE
const PG_UNIQUE_VIOLATION: &str = "23505";

/// unique 제약 위반 (이메일 중복, 토큰 중복)
/// Raised by every store when an insert or update collides with a unique
/// constraint. Callers find it with `anyhow::Error::downcast_ref`.
#[derive(Debug, thiserror::Error)]
#[error("duplicate key value violates unique constraint \"{constraint}\"")]
pub struct UniqueViolation {
    pub constraint: String,
}

impl UniqueViolation {
    pub fn new(constraint: impl Into<String>) -> Self {
        Self { constraint: constraint.into() }
    }

    /// sqlx 에러 변환: 23505 는 `UniqueViolation`, 나머지는 그대로
    pub fn from_sqlx(err: sqlx::Error, context: &'static str) -> anyhow::Error {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or_default().to_string();
                return anyhow::Error::new(Self::new(constraint)).context(context);
            }
        }
        anyhow::Error::new(err).context(context)
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, email: &str, hashed_password: &str) -> Result<User>;

    /// 로그인 시 비밀번호 해시 조회에 사용
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// 이메일 + 비밀번호 교체. 사용자가 없으면 `None`
    async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<Option<User>>;

    /// Chirpy Red 승급. 사용자가 없으면 `false`
    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> Result<bool>;

    /// 전체 삭제 (chirp, refresh token 포함). 삭제된 사용자 수 반환
    async fn delete_all_users(&self) -> Result<u64>;
}

#[async_trait]
pub trait ChirpStore: Send + Sync {
    async fn create_chirp(&self, user_id: Uuid, body: &str) -> Result<Chirp>;

    /// created_at 오름차순
    async fn list_chirps(&self, author_id: Option<Uuid>) -> Result<Vec<Chirp>>;

    async fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>>;

    /// 삭제되었으면 `true`
    async fn delete_chirp(&self, id: Uuid) -> Result<bool>;
}

#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// 토큰 값이 이미 있으면 에러
    async fn store_refresh_token(
        &self,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<()>;

    async fn lookup_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>>;

    /// revoked_at 설정 (이미 설정되어 있으면 유지). 토큰이 없으면 `false`
    async fn mark_revoked(&self, token: &str, now: DateTime<Utc>) -> Result<bool>;
}

/// 저장소 묶음
/// All stores the application needs, behind trait objects.
#[derive(Clone)]
pub struct Storage {
    pub users: Arc<dyn UserStore>,
    pub chirps: Arc<dyn ChirpStore>,
    pub refresh_tokens: Arc<dyn RefreshTokenStore>,
}

impl Storage {
    /// PostgreSQL 저장소
    pub fn postgres(db: &Database) -> Self {
        Self {
            users: Arc::new(UserRepository::new(db.pool().clone())),
            chirps: Arc::new(ChirpRepository::new(db.pool().clone())),
            refresh_tokens: Arc::new(RefreshTokenRepository::new(db.pool().clone())),
        }
    }

    /// In-memory 저장소 (테스트 / DB 없는 개발 환경)
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: store.clone(),
            chirps: store.clone(),
            refresh_tokens: store,
        }
    }
}
