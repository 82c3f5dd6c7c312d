// Admin domain routes
use axum::{routing::{get, post}, Router};
use crate::domains::admin::handlers::admin_handler;
use crate::shared::services::AppState;

/// `/admin` 아래 운영 라우터
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(admin_handler::metrics))
        .route("/reset", post(admin_handler::reset))
}

/// `/api/healthz`
pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/healthz", get(admin_handler::healthz))
}
