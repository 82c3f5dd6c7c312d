use std::sync::Arc;

use crate::domains::admin::services::AdminService;
use crate::domains::auth::services::{AuthState, JwtService};
use crate::domains::billing::services::BillingService;
use crate::domains::chirps::services::ChirpState;
use crate::shared::config::AppConfig;
use crate::shared::database::Storage;
use crate::shared::utils::HitCounter;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 각 도메인의 State를 조합하여 전체 애플리케이션 상태를 관리
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth_state: AuthState,
    pub chirp_state: ChirpState,
    pub billing_service: BillingService,
    pub admin_service: AdminService,
    /// `/app` 방문 수
    pub hits: HitCounter,
}

impl AppState {
    /// Create AppState with configuration and storage
    /// 모든 도메인 State를 초기화하고 조합
    pub fn new(config: AppConfig, storage: Storage) -> Self {
        // 1. 공유 서비스 생성 (JWT, 방문 카운터)
        let jwt_service = JwtService::new(&config.jwt_secret, config.access_token_ttl);
        let hits = HitCounter::new();

        // 2. 각 도메인 State 생성
        let auth_state = AuthState::new(&storage, jwt_service);
        let chirp_state = ChirpState::new(&storage);
        let billing_service = BillingService::new(auth_state.auth_service.clone());
        let admin_service = AdminService::new(
            auth_state.auth_service.clone(),
            hits.clone(),
            config.platform.clone(),
        );

        // 3. AppState 조합
        Self {
            config: Arc::new(config),
            auth_state,
            chirp_state,
            billing_service,
            admin_service,
            hits,
        }
    }
}
