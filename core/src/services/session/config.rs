//! Session service configuration

use chrono::Duration;
use rt_shared::config::AuthConfig;

/// Runtime configuration for the session service.
#[derive(Debug, Clone)]
pub struct SessionServiceConfig {
    /// Symmetric secret for access-token signing
    pub secret: String,

    /// Access token lifetime
    pub access_token_ttl: Duration,

    /// Refresh token lifetime
    pub refresh_token_ttl: Duration,
}

impl SessionServiceConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_ttl: Duration::hours(2),
            refresh_token_ttl: Duration::days(90),
        }
    }
}

impl From<&AuthConfig> for SessionServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            access_token_ttl: Duration::seconds(config.access_token_ttl),
            refresh_token_ttl: Duration::seconds(config.refresh_token_ttl),
        }
    }
}
