//! Business logic services for the application layer.

pub mod url_repository;

pub use url_repository::UrlRepository;
