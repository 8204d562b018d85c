//! CORS policy for browser and mobile clients.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

const DEFAULT_MAX_AGE: usize = 3600;

/// Build the CORS middleware from the process environment.
///
/// With `ALLOWED_ORIGINS` unset the policy accepts any origin, which is
/// what local development and the mobile emulators need. Setting it to a
/// comma-separated origin list locks the policy down for production.
pub fn create_cors() -> Cors {
    let origins = allowed_origins();
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_AGE);

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(max_age);

    match origins {
        Some(origins) => {
            for origin in &origins {
                log::info!("CORS: allowing origin {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
        None => {
            log::info!("CORS: ALLOWED_ORIGINS not set, allowing any origin");
            cors = cors.allow_any_origin();
        }
    }

    cors
}

fn allowed_origins() -> Option<Vec<String>> {
    let raw = env::var("ALLOWED_ORIGINS").ok()?;
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        None
    } else {
        Some(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test because the environment variable is process-global.
    #[test]
    fn test_origin_list_parsing() {
        env::set_var(
            "ALLOWED_ORIGINS",
            " https://app.runtrack.io, https://admin.runtrack.io ,",
        );
        assert_eq!(
            allowed_origins().unwrap(),
            vec!["https://app.runtrack.io", "https://admin.runtrack.io"]
        );

        env::set_var("ALLOWED_ORIGINS", " , ");
        assert!(allowed_origins().is_none());

        env::remove_var("ALLOWED_ORIGINS");
        assert!(allowed_origins().is_none());
    }
}
