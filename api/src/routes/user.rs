use actix_web::HttpResponse;

use crate::dto::auth::ProfileResponse;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/private/user/me
///
/// Returns the identity attached to the request by the authentication
/// gate. The `AuthContext` extractor rejects anonymous callers with 401.
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(ProfileResponse {
        id: auth.user_id.to_string(),
        username: auth.username,
    })
}
