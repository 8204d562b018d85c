//! Credential verification collaborators.

mod hasher;

pub use hasher::PasswordHasher;
