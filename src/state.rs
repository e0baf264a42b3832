//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UrlRepository;

/// State cloned into every handler.
///
/// Built once at startup around a single explicitly constructed store.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<UrlRepository>,
    /// Public base used for `Location` and `Link` headers, without trailing slash.
    pub base_url: String,
}

impl AppState {
    pub fn new(repository: Arc<UrlRepository>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Public redirect URL for a short id.
    pub fn short_url(&self, id: &str) -> String {
        format!("{}/r/{}", self.base_url, id)
    }

    /// Public statistics URL for a short id.
    pub fn stats_url(&self, id: &str) -> String {
        format!("{}/api/stats/{}", self.base_url, id)
    }
}
