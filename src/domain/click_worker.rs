//! Background click counting.
//!
//! Redirect handlers hand click ids to a [`ClickRecorder`], which pushes them
//! onto an unbounded channel. A single worker task drains the channel in
//! submission order and increments the counters in the [`EntryStore`].
//!
//! Clicks still queued when the process dies are lost. Counts are a
//! best-effort metric, not a ledger.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::EntryStore;

/// Sending half of the click queue.
///
/// Cheap to clone; every clone feeds the same worker. The worker stops once
/// all recorders have been dropped and the queue is empty.
#[derive(Clone, Debug)]
pub struct ClickRecorder {
    sender: mpsc::UnboundedSender<ClickEvent>,
}

impl ClickRecorder {
    /// Wraps an existing sender. Mostly useful in tests that want to inspect
    /// the receiving side directly.
    pub fn new(sender: mpsc::UnboundedSender<ClickEvent>) -> Self {
        Self { sender }
    }

    /// Creates the queue and spawns the worker on the current tokio runtime.
    pub fn spawn(store: Arc<dyn EntryStore>) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_click_worker(receiver, store));
        (Self::new(sender), handle)
    }

    /// Queues a click for `id`. Never blocks.
    ///
    /// If the worker has already shut down the click is dropped and logged.
    pub fn submit(&self, id: impl Into<String>) {
        let event = ClickEvent::new(id);
        if let Err(mpsc::error::SendError(event)) = self.sender.send(event) {
            warn!("Click queue closed, dropping click for {}", event.id);
        }
    }

    /// Returns true once the worker side of the queue is gone.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Drains click events and applies them to the store, one at a time.
///
/// Unknown ids are logged and skipped so a single bad event never stalls the
/// queue.
pub async fn run_click_worker(
    mut receiver: mpsc::UnboundedReceiver<ClickEvent>,
    store: Arc<dyn EntryStore>,
) {
    while let Some(event) = receiver.recv().await {
        match store.increment_clicks(&event.id).await {
            Ok(clicks) => debug!("Click recorded for {} (total {})", event.id, clicks),
            Err(e) if e.is_not_found() => {
                warn!("Click for unknown id {} ignored", event.id);
            }
            Err(e) => warn!("Failed to record click for {}: {}", event.id, e),
        }
    }

    info!("Click worker stopped");
}
