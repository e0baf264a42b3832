//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Random short identifier generation

pub mod code_generator;
