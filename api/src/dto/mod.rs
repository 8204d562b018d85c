//! Request and response DTOs.

pub mod auth;

pub use auth::{LoginRequest, LoginResponse, RefreshTokenRequest, RefreshTokenResponse};
