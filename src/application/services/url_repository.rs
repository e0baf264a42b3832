//! Repository facade consumed by the HTTP layer.

use std::sync::Arc;

use crate::domain::click_worker::ClickRecorder;
use crate::domain::entities::{Entry, EntryStats};
use crate::domain::repositories::EntryStore;
use crate::error::AppError;
use serde_json::json;

/// Public API over the entry store and the click queue.
///
/// Handlers never see the store's indices; they go through `get_or_create`,
/// `get`, `submit_click` and `stats`.
pub struct UrlRepository {
    store: Arc<dyn EntryStore>,
    clicks: ClickRecorder,
}

impl UrlRepository {
    /// Creates a facade over `store`, sending clicks through `clicks`.
    pub fn new(store: Arc<dyn EntryStore>, clicks: ClickRecorder) -> Self {
        Self { store, clicks }
    }

    /// Returns the entry for `destination`, creating it on first submission.
    ///
    /// The destination is stored exactly as given, so two strings that differ
    /// only in whitespace get different ids. The flag is `true` when this call
    /// created the entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the destination is empty or only
    /// whitespace.
    /// Returns [`AppError::Internal`] if no identifier could be allocated.
    pub async fn get_or_create(&self, destination: &str) -> Result<(Entry, bool), AppError> {
        if destination.trim().is_empty() {
            return Err(AppError::bad_request(
                "Destination URL must not be empty",
                json!({}),
            ));
        }

        self.store.get_or_create(destination).await
    }

    /// Retrieves an entry by its short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry has this identifier.
    pub async fn get(&self, id: &str) -> Result<Entry, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))
    }

    /// Hands a click off to the background worker and returns immediately.
    pub fn submit_click(&self, id: &str) {
        self.clicks.submit(id);
    }

    /// Returns the click statistics for an entry.
    ///
    /// Counts are eventually consistent: clicks still queued are not included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry has this identifier.
    pub async fn stats(&self, id: &str) -> Result<EntryStats, AppError> {
        self.get(id).await.map(|entry| entry.stats())
    }

    /// Number of stored entries.
    pub async fn entry_count(&self) -> Result<usize, AppError> {
        self.store.len().await
    }

    /// Returns true while the click worker is accepting events.
    pub fn is_click_queue_open(&self) -> bool {
        !self.clicks.is_closed()
    }
}
