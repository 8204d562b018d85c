//! Error taxonomy for authentication and token management.
//!
//! The codec and registry never produce HTTP-shaped errors; these typed
//! failures are interpreted by the session service and translated at the
//! API edge.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// Not a well-formed signed token
    #[error("Malformed token")]
    Malformed,

    /// MAC mismatch; treated as tampering and logged at higher severity
    #[error("Token signature verification failed")]
    BadSignature,

    /// Signature valid, clock past expiry
    #[error("Token expired")]
    Expired,

    /// Signature and expiry valid, but absent from the revocation registry
    #[error("Token revoked")]
    Revoked,

    #[error("Refresh token not found")]
    RefreshTokenNotFound,

    #[error("Refresh token expired")]
    RefreshTokenExpired,

    #[error("Token generation failed")]
    GenerationFailed,
}
