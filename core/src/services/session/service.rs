//! Session lifecycle orchestration.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::domain::entities::token::{AccessTokenClaims, RefreshToken, SessionTokens};
use crate::domain::entities::user::{AuthenticatedUser, User};
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{RefreshTokenRepository, UserRepository};

use super::codec::{TokenCodec, BEARER_PREFIX};
use super::config::SessionServiceConfig;
use super::registry::RevocationRegistry;

/// Orchestrates access-token issuance and validation, refresh-token
/// rotation and renewal, and logout.
///
/// Per access token the observable lifecycle is
/// `Unissued -> Registered&Unexpired -> {Registered&Expired | Revoked}`;
/// both end states are terminal. Expiry comes purely from the clock,
/// revocation only from explicit logout.
pub struct SessionService<R: RefreshTokenRepository, U: UserRepository> {
    refresh_tokens: R,
    users: U,
    registry: Arc<dyn RevocationRegistry>,
    codec: TokenCodec,
    config: SessionServiceConfig,
}

impl<R: RefreshTokenRepository, U: UserRepository> SessionService<R, U> {
    pub fn new(
        refresh_tokens: R,
        users: U,
        registry: Arc<dyn RevocationRegistry>,
        config: SessionServiceConfig,
    ) -> Self {
        Self {
            refresh_tokens,
            users,
            registry,
            codec: TokenCodec::new(&config.secret),
            config,
        }
    }

    /// Mint a signed access token for `username` and register it as
    /// honored.
    pub fn issue_access_token(&self, username: &str) -> Result<String, DomainError> {
        let token = self
            .codec
            .encode(username, Utc::now(), self.config.access_token_ttl)?;
        self.registry.register(&token);
        Ok(token)
    }

    /// Establish a session for an already-authenticated principal: a
    /// fresh access token plus a created-or-rotated refresh token.
    pub async fn login(&self, username: &str) -> Result<SessionTokens, DomainError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let access_token = self.issue_access_token(&user.username)?;
        let refresh_token = self.create_or_rotate_refresh_token(&user).await?;

        info!(username = %user.username, "session established");
        Ok(SessionTokens {
            access_token,
            refresh_token,
        })
    }

    /// Generate a fresh opaque refresh token for the user, overwriting
    /// any existing record. Returns the raw value; only its hash is
    /// stored.
    async fn create_or_rotate_refresh_token(&self, user: &User) -> Result<String, DomainError> {
        let raw = generate_opaque_token();
        let record = RefreshToken::new(user.id, hash_token(&raw), self.config.refresh_token_ttl);
        self.refresh_tokens.upsert(record).await?;
        Ok(raw)
    }

    /// Exchange a refresh token for a new access token.
    ///
    /// The refresh token itself is not rotated here; it stays valid until
    /// its own expiry. An expired record is deleted as a side effect of
    /// the failed renewal.
    pub async fn renew_access_token(&self, refresh_token: &str) -> Result<String, DomainError> {
        let record = self
            .refresh_tokens
            .find_by_hash(&hash_token(refresh_token))
            .await?
            .ok_or(TokenError::RefreshTokenNotFound)?;

        if record.is_expired() {
            self.refresh_tokens.delete_by_user(record.user_id).await?;
            info!(user_id = %record.user_id, "stale refresh token deleted on renewal attempt");
            return Err(TokenError::RefreshTokenExpired.into());
        }

        let user = self
            .users
            .find_by_id(record.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.issue_access_token(&user.username)
    }

    /// Verify an access token: signature, expiry, then registry
    /// membership. A signature-valid, unexpired token that is absent from
    /// the registry is rejected as revoked.
    pub fn validate(&self, token: &str) -> Result<AccessTokenClaims, DomainError> {
        let token = token.strip_prefix(BEARER_PREFIX).unwrap_or(token);

        let claims = self.codec.decode(token).map_err(|e| {
            if e == TokenError::BadSignature {
                warn!("access token failed signature verification");
            }
            e
        })?;

        if !self.registry.is_registered(token) {
            return Err(TokenError::Revoked.into());
        }

        Ok(claims)
    }

    /// `validate` plus principal resolution, for identity attachment at
    /// the request gate.
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, DomainError> {
        let claims = self.validate(token)?;

        let user = self
            .users
            .find_by_username(&claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(AuthenticatedUser {
            user_id: user.id,
            username: user.username,
        })
    }

    /// Terminate the session bound to `token`.
    ///
    /// Revocation happens unconditionally, before the token is even
    /// decoded; a token that cannot be decoded still stops being honored.
    /// Refresh-token deletion needs the subject, so it is skipped when
    /// decoding fails, and the decode error is propagated.
    pub async fn logout(&self, token: &str) -> Result<(), DomainError> {
        let token = token.strip_prefix(BEARER_PREFIX).unwrap_or(token);
        self.registry.revoke(token);

        let claims = self.codec.decode(token)?;

        let user = self
            .users
            .find_by_username(&claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let deleted = self.refresh_tokens.delete_by_user(user.id).await?;
        info!(username = %user.username, refresh_tokens_deleted = deleted, "session terminated");
        Ok(())
    }

    /// The revocation registry backing this service.
    pub fn registry(&self) -> &Arc<dyn RevocationRegistry> {
        &self.registry
    }
}

/// 32 alphanumeric characters from a cryptographically strong source.
fn generate_opaque_token() -> String {
    let mut rng = rand::thread_rng();
    (0..32)
        .map(|_| {
            let idx = rng.gen_range(0..62);
            match idx {
                0..10 => (b'0' + idx) as char,
                10..36 => (b'a' + idx - 10) as char,
                36..62 => (b'A' + idx - 36) as char,
                _ => unreachable!(),
            }
        })
        .collect()
}

/// SHA-256 hex digest of a refresh token for storage and lookup.
fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
