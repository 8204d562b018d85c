//! Client-facing response shapes.

use serde::{Deserialize, Serialize};

/// Error body returned to clients on failed requests.
///
/// The wire shape is a single `error` field; no internal error taxonomy
/// leaks through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

impl ErrorBody {
    /// Create a new error body
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_serialization() {
        let body = ErrorBody::new("Invalid username or password");
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Invalid username or password"}"#);
    }
}
