//! Stateless encode/verify of signed access tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::AccessTokenClaims;
use crate::errors::TokenError;

/// Transport prefix for bearer tokens. Stripping is case-sensitive and
/// includes the single trailing space.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Codec for compact signed access tokens.
///
/// Tokens carry `{sub, iat, exp}` signed with HMAC-SHA512 over a fixed
/// process-wide secret. The codec holds no other state.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS512);
        // Expiry is checked by the codec itself against an injectable
        // clock, with an inclusive boundary at `exp`.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            header: Header::new(Algorithm::HS512),
            validation,
        }
    }

    /// Produce a signed token for `subject`, issued at `now` and expiring
    /// at `now + ttl`.
    pub fn encode(
        &self,
        subject: &str,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let claims = AccessTokenClaims::new(subject, now, ttl);
        encode(&self.header, &claims, &self.encoding_key).map_err(|_| TokenError::GenerationFailed)
    }

    /// Verify a token against the real clock.
    pub fn decode(&self, token: &str) -> Result<AccessTokenClaims, TokenError> {
        self.decode_at(token, Utc::now())
    }

    /// Verify the MAC first (a tampered token fails before expiry is even
    /// considered), then check expiry against `now`.
    pub fn decode_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AccessTokenClaims, TokenError> {
        let data = decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::Malformed,
            })?;

        if data.claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}

/// Strip the transport scheme marker from an Authorization header value.
///
/// Returns `None` when the value does not carry exactly the documented
/// prefix; no further normalization is attempted.
pub fn strip_bearer_prefix(header_value: &str) -> Option<&str> {
    header_value.strip_prefix(BEARER_PREFIX)
}
