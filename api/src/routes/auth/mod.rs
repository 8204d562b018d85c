//! Authentication route handlers
//!
//! This module contains all authentication-related endpoints:
//! - Credential login
//! - Access token renewal
//! - Logout

pub mod login;
pub mod logout;
pub mod refresh;

use std::sync::Arc;

use rt_core::repositories::{RefreshTokenRepository, UserRepository};
use rt_core::services::auth::PasswordHasher;
use rt_core::services::session::SessionService;

/// Application state that holds shared services
pub struct AppState<R, U, H>
where
    R: RefreshTokenRepository,
    U: UserRepository,
    H: PasswordHasher,
{
    pub session_service: Arc<SessionService<R, U>>,
    pub user_repository: U,
    pub password_hasher: H,
}
