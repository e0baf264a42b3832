//! Core domain entities.
//!
//! - [`Entry`] - A short identifier mapped to its destination URL
//! - [`EntryStats`] - Click statistics derived from an entry

pub mod entry;

pub use entry::{Entry, EntryStats};
