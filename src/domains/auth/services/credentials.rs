// 요청 헤더에서 자격 증명 추출
// Pulls credentials out of the `Authorization` header. Pure, no I/O.
use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::shared::errors::AuthError;

pub const BEARER_PREFIX: &str = "Bearer ";
pub const API_KEY_PREFIX: &str = "ApiKey ";

/// `Authorization: Bearer <token>` 에서 토큰 추출
/// Extract the token from `Authorization: Bearer <token>`
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
    extract_with_prefix(headers, BEARER_PREFIX)
}

/// `Authorization: ApiKey <key>` 에서 키 추출
/// Extract the key from `Authorization: ApiKey <key>`
pub fn extract_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    extract_with_prefix(headers, API_KEY_PREFIX)
}

// prefix는 대소문자 구분, 값 주변 공백만 제거
fn extract_with_prefix(headers: &HeaderMap, prefix: &str) -> Result<String, AuthError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::MissingCredential),
    };

    let value = value.to_str().map_err(|_| AuthError::MalformedCredential)?;

    let credential = value
        .strip_prefix(prefix)
        .map(str::trim)
        .ok_or(AuthError::MalformedCredential)?;

    if credential.is_empty() {
        return Err(AuthError::MalformedCredential);
    }

    Ok(credential.to_string())
}
