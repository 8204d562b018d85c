//! # RunTrack API
//!
//! HTTP surface of the RunTrack backend: authentication gate middleware,
//! auth route handlers, DTOs, and error translation.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
