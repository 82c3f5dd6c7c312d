// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

use axum::{middleware, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::shared::middleware::count_hits;
use crate::shared::services::AppState;

// 각 도메인의 routes import
use crate::domains::admin::routes::{create_admin_router, create_health_router};
use crate::domains::auth::routes::create_auth_router;
use crate::domains::billing::routes::create_billing_router;
use crate::domains::chirps::routes::{create_chirps_router, create_validate_chirp_router};

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest(
            "/api",
            create_auth_router()
                .merge(create_health_router())
                .merge(create_validate_chirp_router()),
        )
        .nest("/api/chirps", create_chirps_router())
        .nest("/api/polka", create_billing_router())
        .nest("/admin", create_admin_router())
}

/// 전체 애플리케이션 (API + `/app` 정적 파일 + 요청 로그)
/// Full application: API routes, the hit-counted `/app` file server and
/// request tracing, with state applied.
pub fn create_app(app_state: AppState) -> Router {
    // `/app` 요청만 방문 수에 포함
    let fileserver = Router::new()
        .nest_service("/app", ServeDir::new(&app_state.config.fileserver_root))
        .layer(middleware::from_fn_with_state(app_state.hits.clone(), count_hits));

    create_router()
        .merge(fileserver)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
