// 권한 확인
// Authorization checks run after authentication, before any mutation.
use uuid::Uuid;

use crate::shared::errors::AuthError;

/// admin reset이 허용되는 환경 태그
pub const ADMIN_PLATFORM: &str = "dev";

/// 리소스 소유자 확인
/// The caller must be the recorded owner of the resource
pub fn require_owner(resource_owner_id: Uuid, caller_id: Uuid) -> Result<(), AuthError> {
    if resource_owner_id != caller_id {
        return Err(AuthError::Forbidden(format!(
            "user {caller_id} does not own this resource"
        )));
    }
    Ok(())
}

/// 파괴적인 admin 작업은 dev 환경에서만
/// Destructive admin operations only run on the dev platform
pub fn require_admin_platform(platform: &str) -> Result<(), AuthError> {
    if platform != ADMIN_PLATFORM {
        return Err(AuthError::Forbidden(format!(
            "admin operations are disabled on platform '{platform}'"
        )));
    }
    Ok(())
}

/// 사전 공유 API 키 확인 (서버 간 호출용)
/// Pre-shared key check for server-to-server callers. An unconfigured key
/// rejects everything.
pub fn require_api_key(provided: &str, configured: Option<&str>) -> Result<(), AuthError> {
    match configured {
        Some(expected) if !expected.is_empty() && provided == expected => Ok(()),
        _ => Err(AuthError::InvalidApiKey),
    }
}
