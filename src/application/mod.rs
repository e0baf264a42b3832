//! Application layer services.
//!
//! Services coordinate domain operations and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::url_repository::UrlRepository`] - Short link creation, lookup and click statistics

pub mod services;
