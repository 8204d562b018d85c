//! Repository interfaces for the persistence collaborators.

pub mod token;
pub mod user;

pub use token::RefreshTokenRepository;
pub use user::UserRepository;
