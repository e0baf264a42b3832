//! Repository trait for short link storage.

use crate::domain::entities::Entry;
use crate::error::AppError;
use async_trait::async_trait;

/// Authoritative mapping from identifier to [`Entry`], with a reverse index
/// from destination URL used for deduplication.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryEntryStore`] - process-local maps
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Returns the entry for `destination`, creating it if absent.
    ///
    /// The boolean is `true` only for the call that actually created the
    /// entry. Concurrent calls for the same destination must agree on a
    /// single entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no free identifier could be generated.
    async fn get_or_create(&self, destination: &str) -> Result<(Entry, bool), AppError>;

    /// Finds an entry by its short identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Entry))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: &str) -> Result<Option<Entry>, AppError>;

    /// Increments the click counter of an entry and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry has this identifier. The
    /// store is left untouched in that case.
    async fn increment_clicks(&self, id: &str) -> Result<u64, AppError>;

    /// Number of stored entries.
    async fn len(&self) -> Result<usize, AppError>;
}
