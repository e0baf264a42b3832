//! Entry store implementations.
//!
//! - [`InMemoryEntryStore`] - Process-local maps guarded by a single lock
//!
//! A durable backend would implement [`crate::domain::repositories::EntryStore`]
//! alongside it.

pub mod memory_entry_store;

pub use memory_entry_store::InMemoryEntryStore;
