//! Password hashing contract.
//!
//! Hashing and verification are provided by an external collaborator;
//! only the contract lives in the core. The production implementation is
//! bcrypt-backed and lives in the infrastructure crate.

use crate::errors::DomainError;

/// Hash and verify passwords.
pub trait PasswordHasher: Send + Sync {
    /// Hash a raw password for storage
    fn hash(&self, raw: &str) -> Result<String, DomainError>;

    /// Check a raw password against a stored hash
    fn verify(&self, raw: &str, hash: &str) -> Result<bool, DomainError>;
}
