use actix_web::{web, HttpResponse};

use crate::dto::auth::{RefreshTokenRequest, RefreshTokenResponse};
use crate::handlers::error::handle_domain_error;

use rt_core::repositories::{RefreshTokenRepository, UserRepository};
use rt_core::services::auth::PasswordHasher;

use super::AppState;

/// Handler for POST /api/user/refreshToken
///
/// Exchanges a refresh token for a new access token. The refresh token
/// itself is not rotated.
///
/// # Request Body
///
/// ```json
/// {
///     "token": "string"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Unknown or expired refresh token
/// - 404 Not Found: Owning account no longer exists
/// - 500 Internal Server Error: Token generation failure
pub async fn refresh_token<R, U, H>(
    state: web::Data<AppState<R, U, H>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    R: RefreshTokenRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state.session_service.renew_access_token(&request.token).await {
        Ok(access_token) => HttpResponse::Ok().json(RefreshTokenResponse {
            token: access_token,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
