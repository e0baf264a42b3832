//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod entry_store;

pub use entry_store::EntryStore;

#[cfg(test)]
pub use entry_store::MockEntryStore;
