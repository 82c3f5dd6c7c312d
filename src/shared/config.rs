// 애플리케이션 설정
// Application configuration, read once at startup.
use std::fmt;

use anyhow::{bail, Context, Result};
use chrono::Duration;

/// Access Token 최대 수명 (초)
/// Upper bound for the configured access-token lifetime, in seconds.
pub const MAX_ACCESS_TOKEN_TTL_SECS: i64 = 3600;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_PLATFORM: &str = "prod";

#[derive(Clone)]
pub struct AppConfig {
    /// PostgreSQL 연결 문자열 (없으면 in-memory 저장소)
    /// PostgreSQL URL. `None` runs the server on the in-memory store.
    pub database_url: Option<String>,
    /// Access Token 서명 키
    pub jwt_secret: String,
    /// Polka 웹훅 사전 공유 키
    pub polka_key: Option<String>,
    /// 환경 태그 ("dev"에서만 admin reset 허용)
    pub platform: String,
    pub access_token_ttl: Duration,
    pub bind_addr: String,
    /// `/app` 아래로 서빙할 디렉터리
    pub fileserver_root: String,
    pub cors_origin: Option<String>,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드 (.env 파일 포함)
    /// Load configuration from the environment, after reading an optional `.env`.
    pub fn from_env() -> Result<Self> {
        // .env 파일은 선택사항
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 key lookup으로 설정 구성
    /// Build configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let jwt_secret = match get("JWT_SECRET") {
            Some(secret) => secret,
            None => bail!("JWT_SECRET must be set"),
        };

        let access_token_ttl = match get("ACCESS_TOKEN_TTL_SECONDS") {
            Some(raw) => {
                let secs: i64 = raw
                    .parse()
                    .with_context(|| format!("ACCESS_TOKEN_TTL_SECONDS is not an integer: {raw}"))?;
                let clamped = secs.clamp(1, MAX_ACCESS_TOKEN_TTL_SECS);
                if clamped != secs {
                    tracing::warn!(
                        requested = secs,
                        applied = clamped,
                        "ACCESS_TOKEN_TTL_SECONDS out of range, clamped"
                    );
                }
                Duration::seconds(clamped)
            }
            None => Duration::seconds(MAX_ACCESS_TOKEN_TTL_SECS),
        };

        Ok(Self {
            database_url: get("DB_URL"),
            jwt_secret,
            polka_key: get("POLKA_KEY"),
            platform: get("PLATFORM").unwrap_or_else(|| DEFAULT_PLATFORM.to_string()),
            access_token_ttl,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            fileserver_root: get("FILESERVER_ROOT").unwrap_or_else(|| ".".to_string()),
            cors_origin: get("CORS_ORIGIN"),
        })
    }
}

// 비밀 값은 로그에 남기지 않음
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("jwt_secret", &"<redacted>")
            .field("polka_key", &self.polka_key.as_ref().map(|_| "<redacted>"))
            .field("platform", &self.platform)
            .field("access_token_ttl", &self.access_token_ttl.num_seconds())
            .field("bind_addr", &self.bind_addr)
            .field("fileserver_root", &self.fileserver_root)
            .field("cors_origin", &self.cors_origin)
            .finish()
    }
}
