//! HTTP route handlers.

pub mod auth;
pub mod user;

pub use auth::AppState;
