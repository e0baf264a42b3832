//! Infrastructure layer implementing interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Entry store implementations

pub mod persistence;
