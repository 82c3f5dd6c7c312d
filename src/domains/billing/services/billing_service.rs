use crate::domains::auth::services::AuthService;
use crate::domains::billing::models::{WebhookOutcome, WebhookRequest, USER_UPGRADED_EVENT};
use crate::shared::errors::AuthError;

/// 결제 서비스 (Polka 웹훅)
/// Applies payment-provider events to user accounts
#[derive(Clone)]
pub struct BillingService {
    auth_service: AuthService,
}

impl BillingService {
    pub fn new(auth_service: AuthService) -> Self {
        Self { auth_service }
    }

    pub async fn handle_webhook(&self, request: WebhookRequest) -> Result<WebhookOutcome, AuthError> {
        if request.event != USER_UPGRADED_EVENT {
            tracing::debug!(event = %request.event, "ignoring webhook event");
            return Ok(WebhookOutcome::Ignored);
        }

        self.auth_service
            .upgrade_to_chirpy_red(request.data.user_id)
            .await?;

        Ok(WebhookOutcome::Upgraded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    use crate::domains::auth::services::AuthState;
    use crate::domains::auth::services::JwtService;
    use crate::domains::billing::models::WebhookData;
    use crate::shared::database::{Storage, UserStore};

    fn setup() -> (BillingService, Storage) {
        let storage = Storage::in_memory();
        let auth_state = AuthState::new(&storage, JwtService::new("test-secret", Duration::hours(1)));
        (BillingService::new(auth_state.auth_service), storage)
    }

    fn event(name: &str, user_id: Uuid) -> WebhookRequest {
        WebhookRequest {
            event: name.to_string(),
            data: WebhookData { user_id },
        }
    }

    #[tokio::test]
    async fn test_upgrade_event() {
        let (service, storage) = setup();
        let user = storage.users.create_user("walt@breakingbad.com", "hash").await.unwrap();

        let outcome = service.handle_webhook(event("user.upgraded", user.id)).await.unwrap();
        assert_eq!(outcome, WebhookOutcome::Upgraded);

        let user = storage.users.get_user_by_email("walt@breakingbad.com").await.unwrap().unwrap();
        assert!(user.is_chirpy_red);
    }

    #[tokio::test]
    async fn test_other_events_are_ignored() {
        let (service, storage) = setup();
        let user = storage.users.create_user("walt@breakingbad.com", "hash").await.unwrap();

        let outcome = service.handle_webhook(event("user.payment_failed", user.id)).await.unwrap();
        assert_eq!(outcome, WebhookOutcome::Ignored);

        let user = storage.users.get_user_by_email("walt@breakingbad.com").await.unwrap().unwrap();
        assert!(!user.is_chirpy_red);
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let (service, _storage) = setup();

        let result = service.handle_webhook(event("user.upgraded", Uuid::new_v4())).await;
        assert!(matches!(result, Err(AuthError::UserNotFound { .. })));
    }
}
