//! Route table and shared endpoint handlers.
//!
//! The route table is a `ServiceConfig` function so the same wiring is
//! used by the binary and by integration tests.

use actix_web::{web, HttpResponse};

use crate::routes::auth::{login::login, logout::logout, refresh::refresh_token};
use crate::routes::user::me;

use rt_core::repositories::{RefreshTokenRepository, UserRepository};
use rt_core::services::auth::PasswordHasher;

/// Register every API route.
///
/// Expects an `AppState<R, U, H>` and a `Arc<dyn SessionAuthenticator>`
/// to be present as application data, and the authentication gate to be
/// wrapped around the app.
pub fn configure_api<R, U, H>(cfg: &mut web::ServiceConfig)
where
    R: RefreshTokenRepository + 'static,
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    cfg.route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/user")
                        .route("/login", web::post().to(login::<R, U, H>))
                        .route("/refreshToken", web::post().to(refresh_token::<R, U, H>)),
                )
                .service(
                    web::scope("/private/user")
                        .route("/logout", web::post().to(logout::<R, U, H>))
                        .route("/me", web::get().to(me)),
                ),
        )
        .default_service(web::route().to(not_found));
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "runtrack-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "The requested resource was not found"
    }))
}
