//! Translation of domain errors into HTTP responses.
//!
//! Token problems on protected endpoints always map to a generic
//! unauthorized body; the specific taxonomy member is logged server-side
//! but never revealed to the client.

use actix_web::HttpResponse;

use rt_core::errors::{AuthError, DomainError, TokenError};
use rt_shared::types::response::ErrorBody;

/// Convert a domain error into the appropriate HTTP response.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Token(TokenError::GenerationFailed) => {
            log::error!("token generation failed");
            HttpResponse::InternalServerError().json(ErrorBody::new("An internal error occurred"))
        }
        DomainError::Token(token_error) => {
            match token_error {
                // MAC mismatch means tampering; logged louder than the rest.
                TokenError::BadSignature => {
                    log::error!("token rejected: signature verification failed")
                }
                other => log::warn!("token rejected: {}", other),
            }
            HttpResponse::Unauthorized().json(ErrorBody::new("Unauthorized"))
        }
        DomainError::Auth(AuthError::InvalidCredentials) => {
            HttpResponse::Unauthorized().json(ErrorBody::new("Invalid username or password"))
        }
        DomainError::Auth(AuthError::UserNotFound) => {
            HttpResponse::NotFound().json(ErrorBody::new("User not found"))
        }
        DomainError::Unauthorized => {
            HttpResponse::Unauthorized().json(ErrorBody::new("Unauthorized"))
        }
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorBody::new(message.clone()))
        }
        DomainError::Internal { message } => {
            log::error!("internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorBody::new("An internal error occurred"))
        }
    }
}
