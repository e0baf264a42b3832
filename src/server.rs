//! HTTP server initialization and runtime setup.
//!
//! Wires the entry store, the click worker and the repository facade, then
//! runs the Axum server until a shutdown signal arrives.

use crate::application::services::UrlRepository;
use crate::config::Config;
use crate::domain::click_worker::ClickRecorder;
use crate::domain::repositories::EntryStore;
use crate::infrastructure::persistence::InMemoryEntryStore;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomIdGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;
use tracing::{info, warn};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory entry store
/// - Background click worker
/// - Axum HTTP server with graceful shutdown
///
/// After shutdown the worker drains clicks already queued before returning.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let generator = Arc::new(RandomIdGenerator::new(config.id_length_bytes));
    let store: Arc<dyn EntryStore> = Arc::new(InMemoryEntryStore::new(generator));

    let (clicks, worker) = ClickRecorder::spawn(store.clone());
    info!("Click worker started");

    let repository = Arc::new(UrlRepository::new(store, clicks));
    let state = AppState::new(repository, config.public_base_url());

    let app = app_router(state, config.request_logging);

    let listen_addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", listen_addr))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The server owned the last sender; the worker exits once the queue is empty.
    if let Err(e) = worker.await {
        warn!("Click worker terminated abnormally: {}", e);
    }

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
