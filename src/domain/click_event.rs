//! Click event model for asynchronous click tracking.

/// A redirect that still has to be counted.
///
/// Sent from the redirect handler to the background worker so the HTTP
/// response never waits on the counter update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub id: String,
}

impl ClickEvent {
    /// Creates a new click event for the given short identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
