use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domains::chirps::models::Chirp;
use crate::shared::database::ChirpStore;

/// Chirp Repository
/// Chirp 데이터베이스 작업 처리
pub struct ChirpRepository {
    pool: PgPool,
}

impl ChirpRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_chirp(row: &PgRow) -> Chirp {
        Chirp {
            id: row.get("id"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
            body: row.get("body"),
            user_id: row.get("user_id"),
        }
    }
}

#[async_trait]
impl ChirpStore for ChirpRepository {
    async fn create_chirp(&self, user_id: Uuid, body: &str) -> Result<Chirp> {
        let now = Utc::now();
        let row = sqlx::query(
            r#"
            INSERT INTO chirps (id, created_at, updated_at, body, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_at, updated_at, body, user_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(now)
        .bind(now)
        .bind(body)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create chirp")?;

        Ok(Self::row_to_chirp(&row))
    }

    // 작성자 필터 (선택)
    async fn list_chirps(&self, author_id: Option<Uuid>) -> Result<Vec<Chirp>> {
        let rows = sqlx::query(
            r#"
            SELECT id, created_at, updated_at, body, user_id
            FROM chirps
            WHERE $1::uuid IS NULL OR user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list chirps")?;

        Ok(rows.iter().map(Self::row_to_chirp).collect())
    }

    async fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>> {
        let row = sqlx::query(
            r#"
            SELECT id, created_at, updated_at, body, user_id
            FROM chirps
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch chirp")?;

        Ok(row.as_ref().map(Self::row_to_chirp))
    }

    async fn delete_chirp(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM chirps WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete chirp")?;

        Ok(result.rows_affected() > 0)
    }
}
