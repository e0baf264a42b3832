#![allow(dead_code)]

use axum::Router;
use encurtador::application::services::UrlRepository;
use encurtador::domain::click_event::ClickEvent;
use encurtador::domain::click_worker::ClickRecorder;
use encurtador::domain::repositories::EntryStore;
use encurtador::infrastructure::persistence::InMemoryEntryStore;
use encurtador::routes::router;
use encurtador::state::AppState;
use encurtador::utils::code_generator::RandomIdGenerator;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub const BASE_URL: &str = "http://localhost:8888";

pub fn create_store() -> Arc<dyn EntryStore> {
    Arc::new(InMemoryEntryStore::new(Arc::new(RandomIdGenerator::default())))
}

/// Repository backed by a real store and a running click worker.
///
/// Must be called from inside a tokio runtime.
pub fn create_repository() -> Arc<UrlRepository> {
    let store = create_store();
    let (clicks, _worker) = ClickRecorder::spawn(store.clone());
    Arc::new(UrlRepository::new(store, clicks))
}

/// State with a running click worker.
pub fn create_test_state() -> AppState {
    AppState::new(create_repository(), BASE_URL)
}

/// State whose click queue is drained by the test instead of a worker.
pub fn create_test_state_with_receiver() -> (AppState, mpsc::UnboundedReceiver<ClickEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let repository = Arc::new(UrlRepository::new(create_store(), ClickRecorder::new(tx)));

    (AppState::new(repository, BASE_URL), rx)
}

pub fn create_test_app(state: AppState) -> Router {
    router(state, false)
}

/// Polls the click count until it reaches `expected` or a timeout elapses.
///
/// Returns the last observed count.
pub async fn wait_for_clicks(repository: &UrlRepository, id: &str, expected: u64) -> u64 {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);

    loop {
        let clicks = repository.stats(id).await.unwrap().clicks;
        if clicks >= expected || tokio::time::Instant::now() >= deadline {
            return clicks;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Extracts the id from a `Location` header of the form `<base>/r/<id>`.
pub fn id_from_location(location: &str) -> String {
    location
        .strip_prefix(&format!("{}/r/", BASE_URL))
        .unwrap_or_else(|| panic!("unexpected Location header: {}", location))
        .to_string()
}
