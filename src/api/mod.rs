//! HTTP layer translating requests into repository operations.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies and header sets
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - `/api` route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
