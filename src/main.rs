use axum::http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use chirpy_server::routes::create_app;
use chirpy_server::shared::config::AppConfig;
use chirpy_server::shared::database::{Database, Storage};
use chirpy_server::shared::logging::init_logging;
use chirpy_server::shared::services::AppState;

// Import models for OpenAPI schema
use chirpy_server::domains::auth::models::*;
use chirpy_server::domains::billing::models::*;
use chirpy_server::domains::chirps::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        chirpy_server::domains::auth::handlers::auth_handler::create_user,
        chirpy_server::domains::auth::handlers::auth_handler::update_user,
        chirpy_server::domains::auth::handlers::auth_handler::login,
        chirpy_server::domains::auth::handlers::auth_handler::refresh,
        chirpy_server::domains::auth::handlers::auth_handler::revoke,
        chirpy_server::domains::chirps::handlers::chirp_handler::create_chirp,
        chirpy_server::domains::chirps::handlers::chirp_handler::list_chirps,
        chirpy_server::domains::chirps::handlers::chirp_handler::get_chirp,
        chirpy_server::domains::chirps::handlers::chirp_handler::delete_chirp,
        chirpy_server::domains::chirps::handlers::chirp_handler::validate_chirp,
        chirpy_server::domains::billing::handlers::webhook_handler::polka_webhook,
        chirpy_server::domains::admin::handlers::admin_handler::healthz,
        chirpy_server::domains::admin::handlers::admin_handler::metrics,
        chirpy_server::domains::admin::handlers::admin_handler::reset
    ),
    components(schemas(
        CreateUserRequest,
        UpdateUserRequest,
        LoginRequest,
        LoginResponse,
        RefreshResponse,
        UserResponse,
        CreateChirpRequest,
        ChirpResponse,
        ValidateChirpResponse,
        WebhookRequest,
        WebhookData
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Auth", description = "Users, login and session endpoints"),
        (name = "Chirps", description = "Chirp endpoints"),
        (name = "Billing", description = "Payment provider webhooks"),
        (name = "Admin", description = "Health and admin endpoints")
    ),
    info(
        title = "Chirpy API Server",
        description = "Chirpy API server",
        version = "1.0.0"
    )
)]
struct ApiDoc;

// Security scheme 정의: Swagger UI에서 "Authorize" 버튼 추가
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};

        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            // "Authorization: ApiKey <key>"
            components.add_security_scheme(
                "ApiKeyAuth",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
            );
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    // 설정 로드 (.env + 환경 변수)
    let config = AppConfig::from_env()?;
    tracing::info!(?config, "configuration loaded");

    // 저장소 선택: DB_URL이 있으면 PostgreSQL, 없으면 in-memory
    let storage = match config.database_url.as_deref() {
        Some(db_url) => {
            let db = Database::new(db_url).await?;
            db.initialize().await?;
            tracing::info!("storage: PostgreSQL");
            Storage::postgres(&db)
        }
        None => {
            tracing::warn!("DB_URL not set, using in-memory storage (data is lost on restart)");
            Storage::in_memory()
        }
    };

    let bind_addr = config.bind_addr.clone();
    let cors_origin = config.cors_origin.clone();

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(config, storage);

    // Router 생성
    let mut app = create_app(app_state).merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    // CORS 설정 (CORS_ORIGIN이 있을 때만)
    if let Some(origin) = cors_origin {
        let cors = CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_credentials(true);
        app = app.layer(cors);
    }

    // 서버 시작
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server running on http://{}", bind_addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_addr);

    // 서버 실행
    axum::serve(listener, app).await?;

    Ok(())
}
