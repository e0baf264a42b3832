//! In-memory implementation of the entry store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::domain::entities::Entry;
use crate::domain::id_generator::IdGenerator;
use crate::domain::repositories::EntryStore;
use crate::error::AppError;

/// Candidate ids tried per creation before giving up.
const MAX_ID_ATTEMPTS: usize = 10;

/// Authoritative record. Only the click counter is mutable.
#[derive(Debug)]
struct StoredEntry {
    id: String,
    destination: String,
    clicks: AtomicU64,
    created_at: DateTime<Utc>,
}

impl StoredEntry {
    fn snapshot(&self) -> Entry {
        Entry::new(
            self.id.clone(),
            self.destination.clone(),
            self.clicks.load(Ordering::Relaxed),
            self.created_at,
        )
    }
}

/// Forward and reverse indices. Both always point at the same records.
#[derive(Debug, Default)]
struct Indices {
    by_id: HashMap<String, Arc<StoredEntry>>,
    by_destination: HashMap<String, Arc<StoredEntry>>,
}

/// Process-local [`EntryStore`].
///
/// Both indices live behind one `RwLock`, so the check-then-insert in
/// [`EntryStore::get_or_create`] runs under a single write guard. Lookups and
/// click increments only take the read guard; counters are atomics, so
/// concurrent increments for the same id are never lost.
///
/// No guard is ever held across an `.await`.
pub struct InMemoryEntryStore {
    indices: RwLock<Indices>,
    generator: Arc<dyn IdGenerator>,
}

impl InMemoryEntryStore {
    /// Creates an empty store that mints ids with `generator`.
    pub fn new(generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            indices: RwLock::new(Indices::default()),
            generator,
        }
    }

    /// Draws ids until one is not already taken.
    fn free_id(&self, indices: &Indices) -> Result<String, AppError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.generator.generate()?;

            if !indices.by_id.contains_key(&id) {
                return Ok(id);
            }

            debug!("Generated id {} collides with an existing entry, retrying", id);
        }

        Err(AppError::internal(
            "Failed to generate unique id",
            json!({ "reason": "Too many collisions", "attempts": MAX_ID_ATTEMPTS }),
        ))
    }
}

#[async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn get_or_create(&self, destination: &str) -> Result<(Entry, bool), AppError> {
        if let Some(existing) = self.indices.read().by_destination.get(destination) {
            return Ok((existing.snapshot(), false));
        }

        let mut indices = self.indices.write();

        // Another writer may have created it between the two guards.
        if let Some(existing) = indices.by_destination.get(destination) {
            return Ok((existing.snapshot(), false));
        }

        let id = self.free_id(&indices)?;
        let record = Arc::new(StoredEntry {
            id: id.clone(),
            destination: destination.to_string(),
            clicks: AtomicU64::new(0),
            created_at: Utc::now(),
        });

        indices.by_id.insert(id, Arc::clone(&record));
        indices
            .by_destination
            .insert(destination.to_string(), Arc::clone(&record));

        Ok((record.snapshot(), true))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Entry>, AppError> {
        Ok(self.indices.read().by_id.get(id).map(|r| r.snapshot()))
    }

    async fn increment_clicks(&self, id: &str) -> Result<u64, AppError> {
        let indices = self.indices.read();
        let record = indices
            .by_id
            .get(id)
            .ok_or_else(|| AppError::not_found("Entry not found", json!({ "id": id })))?;

        Ok(record.clicks.fetch_add(1, Ordering::Relaxed) + 1)
    }

    async fn len(&self) -> Result<usize, AppError> {
        Ok(self.indices.read().by_id.len())
    }
}
