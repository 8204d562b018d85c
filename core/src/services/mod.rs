//! Business services containing domain logic and use cases.

pub mod auth;
pub mod session;

// Re-export commonly used types
pub use auth::PasswordHasher;
pub use session::{
    strip_bearer_prefix, InMemoryRevocationRegistry, RevocationRegistry, SessionService,
    SessionServiceConfig, TokenCodec, BEARER_PREFIX,
};
