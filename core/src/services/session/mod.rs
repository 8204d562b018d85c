//! Session-token subsystem.
//!
//! This module handles the full access/refresh token lifecycle:
//! - signed access token encode/verify (stateless codec)
//! - the process-wide revocation registry that makes logout immediate
//! - refresh token issuance, rotation, and renewal
//! - logout and per-request validation

mod codec;
mod config;
mod registry;
mod service;

#[cfg(test)]
mod tests;

pub use codec::{strip_bearer_prefix, TokenCodec, BEARER_PREFIX};
pub use config::SessionServiceConfig;
pub use registry::{InMemoryRevocationRegistry, RevocationRegistry};
pub use service::SessionService;
