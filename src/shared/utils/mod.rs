/// 공유 유틸리티 모듈
/// Shared Utilities Module
///
/// 역할:
/// - 방문 카운터 (fileserver hits)
pub mod hit_counter;

pub use hit_counter::*;
