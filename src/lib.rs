//! # Encurtador
//!
//! A small URL shortening service built with Axum. Short links live in
//! memory for the lifetime of the process; redirects are counted
//! asynchronously.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entry entity, store and generator traits, click worker
//! - **Application Layer** ([`application`]) - The [`UrlRepository`] facade
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory entry store
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /api/encurtar` - Shorten the URL in the raw request body
//! - `GET  /r/{id}` - Redirect (301) to the destination
//! - `GET  /api/stats/{id}` - `{"clicks": n}`
//! - `GET  /health` - Component health
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- -p 8888
//! curl -i -X POST --data 'https://example.com/a' http://localhost:8888/api/encurtar
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use application::services::UrlRepository;
pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlRepository;
    pub use crate::domain::click_worker::ClickRecorder;
    pub use crate::domain::entities::{Entry, EntryStats};
    pub use crate::domain::id_generator::IdGenerator;
    pub use crate::domain::repositories::EntryStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryEntryStore;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::RandomIdGenerator;
}
