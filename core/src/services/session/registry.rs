//! Process-wide revocation registry.
//!
//! Membership in the registry is the sole authority on whether a
//! structurally valid access token is still honored. Contents are
//! memory-only: a process restart forgets explicit revocations, which is
//! an accepted tradeoff bounded by the access-token lifetime.

use std::collections::HashSet;
use std::sync::RwLock;

/// Shared, concurrency-safe set of currently honored token strings.
///
/// All operations are idempotent. Register-then-revoke of the same token
/// must be linearizable with respect to any interleaved `is_registered`
/// call on that token.
pub trait RevocationRegistry: Send + Sync {
    /// Add a token to the honored set
    fn register(&self, token: &str);

    /// Remove a token from the honored set; revoking an absent token is
    /// not an error
    fn revoke(&self, token: &str);

    /// Membership test
    fn is_registered(&self, token: &str) -> bool;
}

/// Registry backed by a lock-protected in-memory set.
pub struct InMemoryRevocationRegistry {
    tokens: RwLock<HashSet<String>>,
}

impl InMemoryRevocationRegistry {
    pub fn new() -> Self {
        Self {
            tokens: RwLock::new(HashSet::new()),
        }
    }
}

impl Default for InMemoryRevocationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RevocationRegistry for InMemoryRevocationRegistry {
    fn register(&self, token: &str) {
        let mut tokens = self.tokens.write().unwrap_or_else(|e| e.into_inner());
        tokens.insert(token.to_string());
    }

    fn revoke(&self, token: &str) {
        let mut tokens = self.tokens.write().unwrap_or_else(|e| e.into_inner());
        tokens.remove(token);
    }

    fn is_registered(&self, token: &str) -> bool {
        let tokens = self.tokens.read().unwrap_or_else(|e| e.into_inner());
        tokens.contains(token)
    }
}
