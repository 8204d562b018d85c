//! # RunTrack Shared
//!
//! Configuration structures and common response types shared across the
//! RunTrack backend crates.

pub mod config;
pub mod types;

pub use config::{AuthConfig, DatabaseConfig, ServerConfig};
pub use types::response::ErrorBody;
