// 방문 수 집계 미들웨어
use axum::{extract::Request, extract::State, middleware::Next, response::Response};

use crate::shared::utils::HitCounter;

/// 정적 파일 요청마다 방문 수 +1
/// Count every request that passes through, before it is served.
pub async fn count_hits(State(hits): State<HitCounter>, request: Request, next: Next) -> Response {
    let total = hits.increment();
    tracing::trace!(hits = total, path = %request.uri().path(), "fileserver hit");
    next.run(request).await
}
