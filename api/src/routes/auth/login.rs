use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LoginRequest, LoginResponse, ProfileResponse};
use crate::handlers::error::handle_domain_error;

use rt_core::domain::entities::user::User;
use rt_core::errors::{AuthError, DomainError};
use rt_core::repositories::{RefreshTokenRepository, UserRepository};
use rt_core::services::auth::PasswordHasher;

use super::AppState;

/// Handler for POST /api/user/login
///
/// Authenticates a username/password pair and establishes a session.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "string",
///     "password": "string"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "eyJ...",
///     "refreshToken": "f3K9...",
///     "message": "Authentication successful",
///     "user": { "id": "...", "username": "..." }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed request body
/// - 401 Unauthorized: Unknown username or wrong password (indistinguishable)
/// - 500 Internal Server Error: Token generation or storage failure
pub async fn login<R, U, H>(
    state: web::Data<AppState<R, U, H>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    R: RefreshTokenRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    if request.0.validate().is_err() {
        return handle_domain_error(&DomainError::Validation {
            message: "Invalid login request".to_string(),
        });
    }

    let user = match verify_credentials(&state, &request.username, &request.password).await {
        Ok(user) => user,
        Err(error) => return handle_domain_error(&error),
    };

    match state.session_service.login(&request.username).await {
        Ok(tokens) => HttpResponse::Ok().json(LoginResponse {
            token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            message: "Authentication successful".to_string(),
            user: ProfileResponse {
                id: user.id.to_string(),
                username: user.username,
            },
        }),
        Err(error) => handle_domain_error(&error),
    }
}

/// Checks the submitted credentials against the stored hash and returns
/// the matching principal.
///
/// Unknown usernames and wrong passwords collapse into the same error so
/// the response does not reveal which part was wrong.
async fn verify_credentials<R, U, H>(
    state: &AppState<R, U, H>,
    username: &str,
    password: &str,
) -> Result<User, DomainError>
where
    R: RefreshTokenRepository,
    U: UserRepository,
    H: PasswordHasher,
{
    let user = state
        .user_repository
        .find_by_username(username)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !state.password_hasher.verify(password, &user.password_hash)? {
        log::warn!("failed login attempt for existing account");
        return Err(AuthError::InvalidCredentials.into());
    }

    Ok(user)
}
