//! User entity and the identity attached to authenticated requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user of the platform.
///
/// Only the fields the session subsystem needs are modeled here; profile
/// data, activities, and the social graph live behind their own services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,

    /// Unique username used as the token subject
    pub username: String,

    /// Hashed credential material; never the raw password
    pub password_hash: String,

    /// Timestamp when the user registered
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a freshly generated id.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}

/// Identity resolved from a validated access token, attached to the
/// request context by the authentication gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The principal's unique identifier
    pub user_id: Uuid,

    /// The principal's username
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_unique_id() {
        let a = User::new("alice", "hash");
        let b = User::new("alice", "hash");
        assert_ne!(a.id, b.id);
        assert_eq!(a.username, "alice");
    }
}
