//! Refresh token repository trait defining the interface for durable
//! refresh-token persistence.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken persistence operations.
///
/// Token values are hashed before storage; every method that takes a hash
/// expects the SHA-256 hex digest of the presented value, never the raw
/// token.
///
/// Implementations must guarantee at most one stored row per user: the
/// store backs a one-to-one principal/refresh-token relationship, and
/// `upsert` overwrites any existing row for the same user.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Find a refresh token by its hashed value
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Token found
    /// * `Ok(None)` - No token stored under the given hash
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Find the refresh token owned by a user, if any
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<RefreshToken>, DomainError>;

    /// Insert the record, or overwrite the existing record for the same
    /// user (rotation). The uniqueness of `user_id` must hold even when a
    /// user races itself.
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The row as stored; on overwrite it keeps
    ///   the existing row's `id`
    /// * `Err(DomainError)` - Save failed
    async fn upsert(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Remove the user's refresh token if present
    ///
    /// # Returns
    /// * `Ok(count)` - Number of rows deleted (0 or 1)
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, DomainError>;
}

#[async_trait]
impl<T: RefreshTokenRepository + ?Sized> RefreshTokenRepository for Arc<T> {
    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        (**self).find_by_hash(token_hash).await
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<RefreshToken>, DomainError> {
        (**self).find_by_user(user_id).await
    }

    async fn upsert(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        (**self).upsert(token).await
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, DomainError> {
        (**self).delete_by_user(user_id).await
    }
}
