// src/domains/auth/services/password_service.rs
use argon2::password_hash::{rand_core::OsRng, Error as PasswordHashError, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

use crate::shared::errors::AuthError;

/// 비밀번호 해싱 서비스
/// Password hashing service (argon2id, PHC string output)
///
/// 비용 파라미터는 고정값 (m = 19 MiB, t = 2, p = 1).
/// 검증은 해시 문자열에 기록된 파라미터를 사용하므로, 파라미터를 올려도
/// 기존 해시는 계속 검증됩니다.
#[derive(Clone)]
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::DEFAULT),
        }
    }

    /// 비밀번호 해싱
    /// Hash a password with a fresh random salt
    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingFailed(e.to_string()))?
            .to_string();

        Ok(password_hash)
    }

    /// 비밀번호 검증
    /// Verify a password against a stored PHC hash
    pub fn verify_password(&self, password: &str, password_hash: &str) -> Result<(), AuthError> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|e| AuthError::MalformedHash(e.to_string()))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(()),
            Err(PasswordHashError::Password) => Err(AuthError::PasswordMismatch),
            Err(e) => Err(AuthError::MalformedHash(e.to_string())),
        }
    }
}
