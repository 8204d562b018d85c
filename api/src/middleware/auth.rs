//! Authentication gate for inbound requests.
//!
//! The gate extracts the bearer token from the Authorization header,
//! validates it through the session service, and attaches the resolved
//! identity to the request. It never terminates a request itself: the
//! exempt login path, requests without a token, and requests whose token
//! fails validation all pass through unauthenticated, and per-endpoint
//! enforcement (the `AuthContext` extractor) decides whether that is
//! acceptable.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use rt_core::domain::entities::user::AuthenticatedUser;
use rt_core::errors::DomainError;
use rt_core::repositories::{RefreshTokenRepository, UserRepository};
use rt_core::services::session::{strip_bearer_prefix, SessionService};

/// Identity attached to requests that presented a valid token.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Principal's unique identifier
    pub user_id: Uuid,
    /// Principal's username (the token subject)
    pub username: String,
}

impl From<AuthenticatedUser> for AuthContext {
    fn from(identity: AuthenticatedUser) -> Self {
        Self {
            user_id: identity.user_id,
            username: identity.username,
        }
    }
}

/// Trait for wrapping the session service to allow dynamic dispatch from
/// the middleware.
#[async_trait]
pub trait SessionAuthenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, DomainError>;
}

#[async_trait]
impl<R, U> SessionAuthenticator for SessionService<R, U>
where
    R: RefreshTokenRepository,
    U: UserRepository,
{
    async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, DomainError> {
        SessionService::authenticate(self, token).await
    }
}

/// Authentication gate middleware factory.
pub struct AuthGate {
    /// Path exempt from authentication (the login endpoint)
    login_path: Rc<String>,
}

impl AuthGate {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: Rc::new(login_path.into()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service: Rc::new(service),
            login_path: Rc::clone(&self.login_path),
        }))
    }
}

/// Authentication gate middleware service.
pub struct AuthGateMiddleware<S> {
    service: Rc<S>,
    login_path: Rc<String>,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let login_path = Rc::clone(&self.login_path);

        Box::pin(async move {
            // The credential-submission path authenticates itself.
            if req.path() == login_path.as_str() {
                return service.call(req).await;
            }

            if let Some(token) = extract_bearer_token(&req) {
                match req.app_data::<web::Data<Arc<dyn SessionAuthenticator>>>() {
                    Some(authenticator) => match authenticator.authenticate(&token).await {
                        Ok(identity) => {
                            req.extensions_mut().insert(AuthContext::from(identity));
                        }
                        Err(e) => {
                            // Degrade to unauthenticated; per-endpoint
                            // enforcement decides the outcome.
                            log::warn!("cannot establish request identity: {}", e);
                        }
                    },
                    None => {
                        log::error!("session authenticator not configured; request left unauthenticated");
                    }
                }
            }

            service.call(req).await
        })
    }
}

/// Extracts the bearer token from the Authorization header.
///
/// The prefix match is case-sensitive and includes the trailing space;
/// anything else yields `None`.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    strip_bearer_prefix(header).map(|s| s.to_string())
}

/// Extractor for endpoints that require an authenticated caller.
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
