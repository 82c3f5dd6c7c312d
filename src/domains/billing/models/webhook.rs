use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// 처리하는 유일한 이벤트
/// The only event that changes state
pub const USER_UPGRADED_EVENT: &str = "user.upgraded";

// Polka 웹훅 요청 모델
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = WebhookRequest)]
pub struct WebhookRequest {
    #[schema(example = "user.upgraded")]
    pub event: String,
    pub data: WebhookData,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = WebhookData)]
pub struct WebhookData {
    pub user_id: Uuid,
}

/// 웹훅 처리 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookOutcome {
    Upgraded,
    /// 관심 없는 이벤트
    Ignored,
}
