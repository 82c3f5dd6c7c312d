// 로깅 초기화
// Logging setup
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// RUST_LOG이 없을 때 기본 필터
/// Filter used when RUST_LOG is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,chirpy_server=debug,sqlx=warn,tower_http=info";

/// tracing subscriber 초기화 (프로세스 시작 시 한 번)
/// Install the global tracing subscriber. Call once at startup.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}
