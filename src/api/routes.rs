//! API route configuration.

use crate::api::handlers::{shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /encurtar`     - Shorten the URL sent as raw body
/// - `GET  /stats/{id}`   - Click statistics for a short link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/encurtar", post(shorten_handler))
        .route("/stats/{id}", get(stats_handler))
}
