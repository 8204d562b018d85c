//! Database connectivity and repository implementations.

pub mod mysql;

pub use mysql::{MySqlRefreshTokenRepository, MySqlUserRepository};

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::debug;

use rt_core::errors::DomainError;
use rt_shared::config::DatabaseConfig;

/// Build a MySQL connection pool from configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, DomainError> {
    debug!(max_connections = config.max_connections, "creating MySQL pool");
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to connect to database: {}", e),
        })
}
