//! MySQL repository implementations.

mod refresh_token_repository;
mod user_repository;

pub use refresh_token_repository::MySqlRefreshTokenRepository;
pub use user_repository::MySqlUserRepository;
