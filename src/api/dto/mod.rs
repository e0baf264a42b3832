//! Data Transfer Objects for API responses.

pub mod health;
pub mod link_headers;
pub mod stats;
