use crate::domains::auth::services::{require_admin_platform, AuthService};
use crate::shared::errors::AuthError;
use crate::shared::utils::HitCounter;

pub const RESET_MESSAGE: &str = "Hits counter reset to 0\n";

/// 운영 도구 (방문 수 조회, 개발 환경 초기화)
#[derive(Clone)]
pub struct AdminService {
    auth_service: AuthService,
    hits: HitCounter,
    platform: String,
}

impl AdminService {
    pub fn new(auth_service: AuthService, hits: HitCounter, platform: String) -> Self {
        Self {
            auth_service,
            hits,
            platform,
        }
    }

    /// 방문 수 HTML 페이지
    pub fn metrics_page(&self) -> String {
        format!(
            r#"<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {} times!</p>
  </body>
</html>
"#,
            self.hits.get()
        )
    }

    /// 전체 사용자 삭제 + 방문 수 초기화 (dev 전용)
    /// Deletes every user (chirps and refresh tokens go with them) and zeroes
    /// the hit counter. Refused unless the platform is `dev`.
    pub async fn reset(&self) -> Result<(), AuthError> {
        require_admin_platform(&self.platform)?;

        let deleted = self.auth_service.delete_all_users().await?;
        self.hits.reset();

        tracing::warn!(deleted_users = deleted, "admin reset completed");
        Ok(())
    }
}
