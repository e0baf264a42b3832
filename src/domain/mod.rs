//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`id_generator`] - Short identifier generation contract
//! - [`click_event`] - Click tracking event model
//! - [`click_worker`] - Asynchronous click processing worker
//!
//! # Click Processing Flow
//!
//! 1. HTTP handler resolves the short id and answers with a redirect
//! 2. [`click_worker::ClickRecorder::submit`] pushes a [`click_event::ClickEvent`]
//!    onto an unbounded channel
//! 3. [`click_worker::run_click_worker`] drains events in order
//! 4. Counters are incremented via [`repositories::EntryStore::increment_clicks`]

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod id_generator;
pub mod repositories;
