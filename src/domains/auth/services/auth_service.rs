use std::sync::Arc;

use uuid::Uuid;

use crate::domains::auth::models::{CreateUserRequest, IssuedRefreshToken, LoginRequest, UpdateUserRequest, User};
use crate::domains::auth::services::{JwtService, PasswordService, RefreshTokenService};
use crate::shared::database::{UniqueViolation, UserStore};
use crate::shared::errors::AuthError;

/// 로그인 결과
/// Outcome of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub access_token: String,
    pub refresh_token: IssuedRefreshToken,
}

// 인증 서비스
// AuthService: user accounts, login and session lifecycle
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    password_service: PasswordService,
    jwt_service: JwtService,
    refresh_token_service: RefreshTokenService,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        password_service: PasswordService,
        jwt_service: JwtService,
        refresh_token_service: RefreshTokenService,
    ) -> Self {
        Self {
            users,
            password_service,
            jwt_service,
            refresh_token_service,
        }
    }

    // 회원가입 (비즈니스 로직)
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, AuthError> {
        let (email, password) = Self::validate_credentials(&request.email, &request.password)?;

        // 1. 이메일 중복 확인
        let existing_user = self
            .users
            .get_user_by_email(email)
            .await
            .map_err(|e| AuthError::Persistence(format!("Failed to check email existence: {:#}", e)))?;

        if existing_user.is_some() {
            return Err(AuthError::EmailAlreadyExists { email: email.to_string() });
        }

        // 2. 비밀번호 해싱
        let hashed_password = self.password_service.hash_password(password)?;

        // 3. 사용자 생성
        let user = self
            .users
            .create_user(email, &hashed_password)
            .await
            .map_err(|e| Self::store_write_error(e, email, "Failed to create user"))?;

        tracing::info!(user_id = %user.id, "user created");
        Ok(user)
    }

    // 이메일 + 비밀번호 변경 (본인만)
    pub async fn update_user(&self, user_id: Uuid, request: UpdateUserRequest) -> Result<User, AuthError> {
        let (email, password) = Self::validate_credentials(&request.email, &request.password)?;

        let owner = self
            .users
            .get_user_by_email(email)
            .await
            .map_err(|e| AuthError::Persistence(format!("Failed to check email existence: {:#}", e)))?;

        if owner.is_some_and(|u| u.id != user_id) {
            return Err(AuthError::EmailAlreadyExists { email: email.to_string() });
        }

        let hashed_password = self.password_service.hash_password(password)?;

        self.users
            .update_credentials(user_id, email, &hashed_password)
            .await
            .map_err(|e| Self::store_write_error(e, email, "Failed to update user"))?
            .ok_or(AuthError::UserNotFound { id: user_id })
    }

    // 로그인 (비즈니스 로직)
    // 비밀번호 확인 → Access Token 발급 → Refresh Token 발급/저장
    pub async fn login(&self, request: LoginRequest) -> Result<LoginOutcome, AuthError> {
        // 1. 이메일로 사용자 조회 (없으면 비밀번호 불일치와 같은 에러)
        let user = self
            .users
            .get_user_by_email(request.email.trim())
            .await
            .map_err(|e| AuthError::Persistence(format!("Failed to fetch user: {:#}", e)))?
            .ok_or(AuthError::PasswordMismatch)?;

        // 2. 비밀번호 검증
        self.password_service
            .verify_password(&request.password, &user.hashed_password)?;

        // 3. Access Token 발급
        let access_token = self.jwt_service.issue_access_token(user.id)?;

        // 4. Refresh Token 발급 및 저장
        let refresh_token = self.refresh_token_service.issue(user.id).await?;

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(LoginOutcome {
            user,
            access_token,
            refresh_token,
        })
    }

    /// Refresh Token 검증 및 새 Access Token 발급
    /// Verify refresh token and issue a new access token. The refresh token
    /// itself is left unchanged.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, AuthError> {
        let user_id = self.refresh_token_service.resolve(refresh_token).await?;
        self.jwt_service.issue_access_token(user_id)
    }

    /// Refresh Token 무효화
    /// Revoke refresh token
    pub async fn revoke(&self, refresh_token: &str) -> Result<(), AuthError> {
        self.refresh_token_service.revoke(refresh_token).await
    }

    /// Chirpy Red 승급 (billing webhook)
    pub async fn upgrade_to_chirpy_red(&self, user_id: Uuid) -> Result<(), AuthError> {
        let upgraded = self
            .users
            .upgrade_to_chirpy_red(user_id)
            .await
            .map_err(|e| AuthError::Persistence(format!("Failed to upgrade user: {:#}", e)))?;

        if !upgraded {
            return Err(AuthError::UserNotFound { id: user_id });
        }

        tracing::info!(user_id = %user_id, "user upgraded to chirpy red");
        Ok(())
    }

    /// 전체 사용자 삭제 (admin reset)
    pub async fn delete_all_users(&self) -> Result<u64, AuthError> {
        self.users
            .delete_all_users()
            .await
            .map_err(|e| AuthError::Persistence(format!("Failed to delete users: {:#}", e)))
    }

    // 사전 확인 후 동시 요청이 같은 이메일을 먼저 저장한 경우도 중복으로 처리
    fn store_write_error(err: anyhow::Error, email: &str, context: &str) -> AuthError {
        if err.downcast_ref::<UniqueViolation>().is_some() {
            return AuthError::EmailAlreadyExists { email: email.to_string() };
        }
        AuthError::Persistence(format!("{}: {:#}", context, err))
    }

    fn validate_credentials<'a>(email: &'a str, password: &'a str) -> Result<(&'a str, &'a str), AuthError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AuthError::Validation("Email is required".to_string()));
        }
        if password.trim().is_empty() {
            return Err(AuthError::Validation("Password is required".to_string()));
        }
        Ok((email, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    use async_trait::async_trait;

    use crate::shared::database::{MemoryStore, Storage};
    use crate::shared::errors::SessionFailure;

    fn service() -> (AuthService, JwtService) {
        let storage = Storage::in_memory();
        let jwt_service = JwtService::new("test-secret", Duration::hours(1));
        let service = AuthService::new(
            storage.users.clone(),
            PasswordService::new(),
            jwt_service.clone(),
            RefreshTokenService::new(storage.refresh_tokens.clone()),
        );
        (service, jwt_service)
    }

    fn credentials(email: &str, password: &str) -> (String, String) {
        (email.to_string(), password.to_string())
    }

    async fn signup(service: &AuthService, email: &str, password: &str) -> User {
        let (email, password) = credentials(email, password);
        service
            .create_user(CreateUserRequest { email, password })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_login_issues_both_tokens() {
        let (service, jwt) = service();
        let user = signup(&service, "saul@bettercall.com", "123456").await;

        let outcome = service
            .login(LoginRequest {
                email: "saul@bettercall.com".to_string(),
                password: "123456".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(outcome.user.id, user.id);
        assert_eq!(jwt.verify_access_token(&outcome.access_token).unwrap(), user.id);
        assert_eq!(outcome.refresh_token.token.len(), 64);
        let lifetime = outcome.refresh_token.expires_at - Utc::now();
        assert!(lifetime > Duration::days(59) && lifetime <= Duration::days(60));
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_look_the_same() {
        let (service, _jwt) = service();
        signup(&service, "saul@bettercall.com", "123456").await;

        let wrong_password = service
            .login(LoginRequest {
                email: "saul@bettercall.com".to_string(),
                password: "654321".to_string(),
            })
            .await
            .unwrap_err();
        let unknown_email = service
            .login(LoginRequest {
                email: "kim@bettercall.com".to_string(),
                password: "123456".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::PasswordMismatch));
        assert!(matches!(unknown_email, AuthError::PasswordMismatch));
        assert_eq!(wrong_password.client_message(), unknown_email.client_message());
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let (service, _jwt) = service();
        signup(&service, "saul@bettercall.com", "123456").await;

        let result = service
            .create_user(CreateUserRequest {
                email: "saul@bettercall.com".to_string(),
                password: "other".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::EmailAlreadyExists { .. })));
    }

    /// 이메일 사전 확인이 항상 비어 있다고 답하는 저장소 (동시 가입 재현)
    struct StaleLookupStore(MemoryStore);

    #[async_trait]
    impl UserStore for StaleLookupStore {
        async fn create_user(&self, email: &str, hashed_password: &str) -> anyhow::Result<User> {
            self.0.create_user(email, hashed_password).await
        }

        async fn get_user_by_email(&self, _email: &str) -> anyhow::Result<Option<User>> {
            Ok(None)
        }

        async fn update_credentials(
            &self,
            id: Uuid,
            email: &str,
            hashed_password: &str,
        ) -> anyhow::Result<Option<User>> {
            self.0.update_credentials(id, email, hashed_password).await
        }

        async fn upgrade_to_chirpy_red(&self, id: Uuid) -> anyhow::Result<bool> {
            self.0.upgrade_to_chirpy_red(id).await
        }

        async fn delete_all_users(&self) -> anyhow::Result<u64> {
            self.0.delete_all_users().await
        }
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_email_is_not_a_server_error() {
        let storage = Storage::in_memory();
        let service = AuthService::new(
            Arc::new(StaleLookupStore(MemoryStore::new())),
            PasswordService::new(),
            JwtService::new("test-secret", Duration::hours(1)),
            RefreshTokenService::new(storage.refresh_tokens.clone()),
        );
        let walt = signup(&service, "walt@breakingbad.com", "123456").await;
        signup(&service, "jesse@breakingbad.com", "123456").await;

        let signup_again = service
            .create_user(CreateUserRequest {
                email: "walt@breakingbad.com".to_string(),
                password: "other".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(signup_again, AuthError::EmailAlreadyExists { .. }));
        assert_eq!(signup_again.status_code(), axum::http::StatusCode::BAD_REQUEST);

        let take_email = service
            .update_user(
                walt.id,
                UpdateUserRequest {
                    email: "jesse@breakingbad.com".to_string(),
                    password: "123456".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(take_email, AuthError::EmailAlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_blank_credentials_are_rejected() {
        let (service, _jwt) = service();

        for (email, password) in [("", "123456"), ("  ", "123456"), ("a@b.com", ""), ("a@b.com", "   ")] {
            let result = service
                .create_user(CreateUserRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                })
                .await;
            assert!(matches!(result, Err(AuthError::Validation(_))));
        }
    }

    #[tokio::test]
    async fn test_refresh_and_revoke() {
        let (service, jwt) = service();
        let user = signup(&service, "saul@bettercall.com", "123456").await;
        let outcome = service
            .login(LoginRequest {
                email: user.email.clone(),
                password: "123456".to_string(),
            })
            .await
            .unwrap();

        let access_token = service
            .refresh_access_token(&outcome.refresh_token.token)
            .await
            .unwrap();
        assert_eq!(jwt.verify_access_token(&access_token).unwrap(), user.id);

        service.revoke(&outcome.refresh_token.token).await.unwrap();

        let result = service.refresh_access_token(&outcome.refresh_token.token).await;
        assert!(matches!(result, Err(AuthError::SessionInvalid(SessionFailure::Revoked))));
    }

    #[tokio::test]
    async fn test_update_user_changes_login_credentials() {
        let (service, _jwt) = service();
        let user = signup(&service, "walt@breakingbad.com", "123456").await;

        let updated = service
            .update_user(
                user.id,
                UpdateUserRequest {
                    email: "heisenberg@breakingbad.com".to_string(),
                    password: "losPollos".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.email, "heisenberg@breakingbad.com");

        let old = service
            .login(LoginRequest {
                email: "walt@breakingbad.com".to_string(),
                password: "123456".to_string(),
            })
            .await;
        assert!(matches!(old, Err(AuthError::PasswordMismatch)));

        let new = service
            .login(LoginRequest {
                email: "heisenberg@breakingbad.com".to_string(),
                password: "losPollos".to_string(),
            })
            .await;
        assert!(new.is_ok());
    }

    #[tokio::test]
    async fn test_update_user_cannot_take_another_email() {
        let (service, _jwt) = service();
        let walt = signup(&service, "walt@breakingbad.com", "123456").await;
        signup(&service, "jesse@breakingbad.com", "123456").await;

        let result = service
            .update_user(
                walt.id,
                UpdateUserRequest {
                    email: "jesse@breakingbad.com".to_string(),
                    password: "123456".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(AuthError::EmailAlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_upgrade_unknown_user() {
        let (service, _jwt) = service();

        let result = service.upgrade_to_chirpy_red(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AuthError::UserNotFound { .. })));
    }
}
