use actix_web::{http::header::AUTHORIZATION, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::handlers::error::handle_domain_error;

use rt_core::errors::{DomainError, TokenError};
use rt_core::repositories::{RefreshTokenRepository, UserRepository};
use rt_core::services::auth::PasswordHasher;

use super::AppState;

/// Handler for POST /api/private/user/logout
///
/// Terminates the session bound to the presented access token. The token
/// is revoked even when it turns out to be expired or otherwise invalid.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {}
/// ```
///
/// An already-expired token also yields 200: the caller's goal (the token
/// no longer being honored) is achieved either way.
///
/// ## Errors
/// - 401 Unauthorized: Missing, malformed, or forged token
pub async fn logout<R, U, H>(
    req: HttpRequest,
    state: web::Data<AppState<R, U, H>>,
) -> HttpResponse
where
    R: RefreshTokenRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let Some(token) = header else {
        return handle_domain_error(&DomainError::Unauthorized);
    };

    match state.session_service.logout(token).await {
        Ok(()) => HttpResponse::Ok().json(json!({})),
        Err(DomainError::Token(TokenError::Expired)) => {
            // Revocation already happened; expiry makes it moot.
            log::info!("logout with expired token treated as success");
            HttpResponse::Ok().json(json!({}))
        }
        Err(error) => handle_domain_error(&error),
    }
}
