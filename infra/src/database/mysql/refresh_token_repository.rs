//! MySQL implementation of the RefreshTokenRepository trait.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE refresh_tokens (
//!     id         CHAR(36)     NOT NULL PRIMARY KEY,
//!     user_id    CHAR(36)     NOT NULL,
//!     token_hash CHAR(64)     NOT NULL,
//!     created_at TIMESTAMP(6) NOT NULL,
//!     expires_at TIMESTAMP(6) NOT NULL,
//!     UNIQUE KEY uq_refresh_tokens_user (user_id),
//!     UNIQUE KEY uq_refresh_tokens_hash (token_hash)
//! );
//! ```
//!
//! The unique key on `user_id` is what turns `upsert` into
//! overwrite-in-place rotation, and keeps a user racing itself from ever
//! creating a second row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rt_core::domain::entities::token::RefreshToken;
use rt_core::errors::DomainError;
use rt_core::repositories::RefreshTokenRepository;

/// MySQL-backed refresh token store.
pub struct MySqlRefreshTokenRepository {
    pool: MySqlPool,
}

impl MySqlRefreshTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| internal(format!("Failed to get id: {}", e)))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| internal(format!("Failed to get user_id: {}", e)))?;

        Ok(RefreshToken {
            id: Uuid::parse_str(&id)
                .map_err(|e| internal(format!("Invalid token UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| internal(format!("Invalid user UUID: {}", e)))?,
            token_hash: row
                .try_get("token_hash")
                .map_err(|e| internal(format!("Failed to get token_hash: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| internal(format!("Failed to get created_at: {}", e)))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| internal(format!("Failed to get expires_at: {}", e)))?,
        })
    }
}

fn internal(message: String) -> DomainError {
    DomainError::Internal { message }
}

#[async_trait]
impl RefreshTokenRepository for MySqlRefreshTokenRepository {
    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token_hash, created_at, expires_at
            FROM refresh_tokens
            WHERE token_hash = ?
        "#;

        let row = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to find refresh token: {}", e)))?;

        row.as_ref().map(Self::row_to_token).transpose()
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token_hash, created_at, expires_at
            FROM refresh_tokens
            WHERE user_id = ?
        "#;

        let row = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to find refresh token by user: {}", e)))?;

        row.as_ref().map(Self::row_to_token).transpose()
    }

    async fn upsert(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (id, user_id, token_hash, created_at, expires_at)
            VALUES (?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                token_hash = VALUES(token_hash),
                created_at = VALUES(created_at),
                expires_at = VALUES(expires_at)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.user_id.to_string())
            .bind(&token.token_hash)
            .bind(token.created_at)
            .bind(token.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to save refresh token: {}", e)))?;

        // On overwrite the duplicate-key path keeps the existing row's id,
        // so the stored row is re-read instead of echoing the input.
        self.find_by_user(token.user_id)
            .await?
            .ok_or_else(|| internal("Refresh token missing after upsert".to_string()))
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| internal(format!("Failed to delete refresh token: {}", e)))?;

        Ok(result.rows_affected())
    }
}
