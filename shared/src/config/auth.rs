//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Configuration for the session-token subsystem.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret key used for signing access tokens
    pub secret: String,

    /// Access token lifetime in seconds
    pub access_token_ttl: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_ttl: i64,

    /// Request path exempt from the authentication gate (the login endpoint)
    pub login_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-me-in-production"),
            access_token_ttl: 2 * 60 * 60,           // 2 hours
            refresh_token_ttl: 90 * 24 * 60 * 60,    // 90 days
            login_path: String::from("/api/user/login"),
        }
    }
}

impl AuthConfig {
    /// Create a configuration with the given signing secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token lifetime in minutes
    pub fn with_access_ttl_minutes(mut self, minutes: i64) -> Self {
        self.access_token_ttl = minutes * 60;
        self
    }

    /// Set refresh token lifetime in days
    pub fn with_refresh_ttl_days(mut self, days: i64) -> Self {
        self.refresh_token_ttl = days * 86400;
        self
    }

    /// Check whether the placeholder secret is still in use
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "change-me-in-production"
    }
}
