//! Domain entities.

pub mod token;
pub mod user;

pub use token::{AccessTokenClaims, RefreshToken, SessionTokens};
pub use user::{AuthenticatedUser, User};
