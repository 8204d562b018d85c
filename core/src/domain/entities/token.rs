//! Token entities for the session lifecycle.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by a signed access token.
///
/// Access tokens are never persisted; this struct only exists as the
/// decoded form of the signed serialized string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject (the principal's username)
    pub sub: String,

    /// Issued at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl AccessTokenClaims {
    /// Creates claims for an access token issued at `now` with the given
    /// lifetime. `exp` is always strictly greater than `iat` for any
    /// positive `ttl`.
    pub fn new(subject: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Expiry check with an inclusive boundary: a token is expired at
    /// exactly `exp`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Expiry check against the real clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Refresh token record persisted per principal.
///
/// A principal owns at most one live refresh token; rotation overwrites
/// the existing record instead of appending a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Owning principal
    pub user_id: Uuid,

    /// SHA-256 hash of the opaque token value
    pub token_hash: String,

    /// Timestamp when the record was created or last rotated
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Creates a new refresh token record expiring `ttl` from now.
    pub fn new(user_id: Uuid, token_hash: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Pure comparison of the stored expiry to the given instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Expiry check against the real clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// The pair of credentials handed out at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    /// Signed access token
    pub access_token: String,

    /// Opaque refresh token (the raw value, not the stored hash)
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_embed_subject_and_expiry() {
        let now = Utc::now();
        let claims = AccessTokenClaims::new("alice", now, Duration::hours(2));

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp, (now + Duration::hours(2)).timestamp());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_claims_expiry_boundary_is_inclusive() {
        let now = Utc::now();
        let claims = AccessTokenClaims::new("alice", now, Duration::hours(1));

        let at_expiry = now + Duration::hours(1);
        assert!(claims.is_expired_at(at_expiry));
        assert!(!claims.is_expired_at(at_expiry - Duration::seconds(1)));
    }

    #[test]
    fn test_refresh_token_creation() {
        let user_id = Uuid::new_v4();
        let token = RefreshToken::new(user_id, "hash".to_string(), Duration::days(90));

        assert_eq!(token.user_id, user_id);
        assert_eq!(token.token_hash, "hash");
        assert!(!token.is_expired());
    }

    #[test]
    fn test_refresh_token_expiration() {
        let user_id = Uuid::new_v4();
        let mut token = RefreshToken::new(user_id, "hash".to_string(), Duration::days(90));

        token.expires_at = Utc::now() - Duration::days(1);
        assert!(token.is_expired());
    }

    #[test]
    fn test_session_tokens_serialization() {
        let tokens = SessionTokens {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
        };

        let json = serde_json::to_string(&tokens).unwrap();
        let deserialized: SessionTokens = serde_json::from_str(&json).unwrap();
        assert_eq!(tokens, deserialized);
    }
}
