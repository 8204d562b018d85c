//! bcrypt implementation of the password-hashing contract.

use rt_core::errors::DomainError;
use rt_core::services::auth::PasswordHasher;

/// bcrypt-backed password hasher.
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, raw: &str) -> Result<String, DomainError> {
        bcrypt::hash(raw, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    fn verify(&self, raw: &str, hash: &str) -> Result<bool, DomainError> {
        bcrypt::verify(raw, hash).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        // Minimum cost keeps the test fast.
        let hasher = BcryptPasswordHasher::with_cost(4);

        let stored = hasher.hash("correct horse").unwrap();
        assert_ne!(stored, "correct horse");
        assert!(hasher.verify("correct horse", &stored).unwrap());
        assert!(!hasher.verify("battery staple", &stored).unwrap());
    }
}
