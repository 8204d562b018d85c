//! Typed configuration for the RunTrack backend.
//!
//! Values are normally loaded from environment variables by the binary;
//! the structs here only define shape and defaults.

mod auth;
mod database;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;
