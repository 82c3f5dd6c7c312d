/// 방문 카운터
/// Hit Counter
///
/// 역할:
/// - `/app` 파일 서버 요청 수 집계
/// - admin metrics 페이지에서 조회, admin reset에서 초기화
///
/// 전역 static 대신 AppState에 담아서 전달합니다.
/// 프로세스 시작 시 0으로 생성되고, 복제본은 같은 카운터를 공유합니다.
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct HitCounter {
    hits: Arc<AtomicU64>,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 카운터 증가, 증가 후 값 반환
    /// Increment and return the new value
    pub fn increment(&self) -> u64 {
        self.hits.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// 현재 값 조회
    /// Current value
    pub fn get(&self) -> u64 {
        self.hits.load(Ordering::SeqCst)
    }

    /// 0으로 초기화
    /// Reset to zero
    pub fn reset(&self) {
        self.hits.store(0, Ordering::SeqCst);
    }
}
