use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Successful login payload: both tokens, a brief message, and a summary
/// of the authenticated principal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed access token
    pub token: String,

    /// Opaque refresh token
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,

    pub message: String,

    /// The principal the session was established for
    pub user: ProfileResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    /// The refresh token value as handed out at login
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenResponse {
    /// A freshly minted access token
    pub token: String,
}

/// Brief principal summary for authenticated requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_wire_shape() {
        let response = LoginResponse {
            token: "a".to_string(),
            refresh_token: "r".to_string(),
            message: "Authentication successful".to_string(),
            user: ProfileResponse {
                id: "11111111-2222-3333-4444-555555555555".to_string(),
                username: "alice".to_string(),
            },
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""refreshToken":"r""#));
        assert!(json.contains(r#""token":"a""#));
        assert!(json.contains(r#""user":{"id":"11111111-2222-3333-4444-555555555555","username":"alice"}"#));
    }

    #[test]
    fn test_login_request_validation_rejects_empty_username() {
        use validator::Validate;

        let request = LoginRequest {
            username: String::new(),
            password: "pw".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
