// In-memory 저장소
// In-memory implementation of every store trait. Used by tests and by dev
// runs without a database. One mutex guards all tables so cascading deletes
// stay consistent.
use std::collections::HashMap;

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use crate::domains::auth::models::{RefreshToken, User};
use crate::domains::chirps::models::Chirp;
use crate::shared::database::{ChirpStore, RefreshTokenStore, UniqueViolation, UserStore};

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    /// 삽입 순서 유지
    chirps: Vec<Chirp>,
    refresh_tokens: HashMap<String, RefreshToken>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, email: &str, hashed_password: &str) -> Result<User> {
        let mut tables = self.tables.lock();
        if tables.users.values().any(|u| u.email == email) {
            return Err(UniqueViolation::new("users_email_key").into());
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            hashed_password: hashed_password.to_string(),
            is_chirpy_red: false,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let tables = self.tables.lock();
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<Option<User>> {
        let mut tables = self.tables.lock();
        if tables.users.values().any(|u| u.email == email && u.id != id) {
            return Err(UniqueViolation::new("users_email_key").into());
        }

        Ok(tables.users.get_mut(&id).map(|user| {
            user.email = email.to_string();
            user.hashed_password = hashed_password.to_string();
            user.updated_at = Utc::now();
            user.clone()
        }))
    }

    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> Result<bool> {
        let mut tables = self.tables.lock();
        Ok(match tables.users.get_mut(&id) {
            Some(user) => {
                user.is_chirpy_red = true;
                user.updated_at = Utc::now();
                true
            }
            None => false,
        })
    }

    async fn delete_all_users(&self) -> Result<u64> {
        let mut tables = self.tables.lock();
        let deleted = tables.users.len() as u64;
        tables.users.clear();
        tables.chirps.clear();
        tables.refresh_tokens.clear();
        Ok(deleted)
    }
}

#[async_trait]
impl ChirpStore for MemoryStore {
    async fn create_chirp(&self, user_id: Uuid, body: &str) -> Result<Chirp> {
        let mut tables = self.tables.lock();
        if !tables.users.contains_key(&user_id) {
            bail!("insert on table \"chirps\" violates foreign key constraint \"chirps_user_id_fkey\"");
        }

        let now = Utc::now();
        let chirp = Chirp {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            body: body.to_string(),
            user_id,
        };
        tables.chirps.push(chirp.clone());
        Ok(chirp)
    }

    async fn list_chirps(&self, author_id: Option<Uuid>) -> Result<Vec<Chirp>> {
        let tables = self.tables.lock();
        let mut chirps: Vec<Chirp> = tables
            .chirps
            .iter()
            .filter(|c| author_id.map_or(true, |author| c.user_id == author))
            .cloned()
            .collect();
        chirps.sort_by_key(|c| c.created_at);
        Ok(chirps)
    }

    async fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>> {
        let tables = self.tables.lock();
        Ok(tables.chirps.iter().find(|c| c.id == id).cloned())
    }

    async fn delete_chirp(&self, id: Uuid) -> Result<bool> {
        let mut tables = self.tables.lock();
        let before = tables.chirps.len();
        tables.chirps.retain(|c| c.id != id);
        Ok(tables.chirps.len() != before)
    }
}

#[async_trait]
impl RefreshTokenStore for MemoryStore {
    async fn store_refresh_token(
        &self,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<()> {
        let mut tables = self.tables.lock();
        if tables.refresh_tokens.contains_key(token) {
            return Err(UniqueViolation::new("refresh_tokens_pkey").into());
        }

        let now = Utc::now();
        tables.refresh_tokens.insert(
            token.to_string(),
            RefreshToken {
                token: token.to_string(),
                user_id,
                created_at: now,
                updated_at: now,
                expires_at,
                revoked_at: None,
            },
        );
        Ok(())
    }

    async fn lookup_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>> {
        Ok(self.tables.lock().refresh_tokens.get(token).cloned())
    }

    async fn mark_revoked(&self, token: &str, now: DateTime<Utc>) -> Result<bool> {
        let mut tables = self.tables.lock();
        Ok(match tables.refresh_tokens.get_mut(token) {
            Some(record) => {
                // 최초 무효화 시각 유지
                record.revoked_at.get_or_insert(now);
                record.updated_at = now;
                true
            }
            None => false,
        })
    }
}
