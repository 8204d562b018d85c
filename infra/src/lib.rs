//! # RunTrack Infrastructure
//!
//! Concrete implementations of the core repository and security
//! contracts: MySQL persistence via SQLx and bcrypt password hashing.

pub mod database;
pub mod security;

pub use database::{
    create_pool, MySqlRefreshTokenRepository, MySqlUserRepository,
};
pub use security::BcryptPasswordHasher;
