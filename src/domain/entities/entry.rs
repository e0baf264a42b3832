//! Entry entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A read-only snapshot of a stored short link.
///
/// The store owns the authoritative record; values of this type are copies
/// taken at lookup time, so `clicks` may already be stale when inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub destination: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Creates a snapshot of an entry.
    pub fn new(id: String, destination: String, clicks: u64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            destination,
            clicks,
            created_at,
        }
    }

    /// Returns the click statistics for this entry.
    pub fn stats(&self) -> EntryStats {
        EntryStats {
            clicks: self.clicks,
        }
    }
}

/// Click statistics exposed for a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStats {
    pub clicks: u64,
}
