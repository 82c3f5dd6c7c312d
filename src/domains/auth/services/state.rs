// Auth domain state
// 인증 도메인 상태
use crate::domains::auth::services::{AuthService, JwtService, PasswordService, RefreshTokenService};
use crate::shared::database::Storage;

/// Auth domain state
/// 인증 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: AuthService,
    pub jwt_service: JwtService,
}

impl AuthState {
    /// Create AuthState with storage and JWT service
    /// AuthState 생성 (저장소와 JWT 서비스 필요)
    pub fn new(storage: &Storage, jwt_service: JwtService) -> Self {
        let auth_service = AuthService::new(
            storage.users.clone(),
            PasswordService::new(),
            jwt_service.clone(),
            RefreshTokenService::new(storage.refresh_tokens.clone()),
        );

        Self {
            auth_service,
            jwt_service,
        }
    }
}
