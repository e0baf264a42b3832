//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /r/{id}`           - Short link redirect
//! - `POST /api/encurtar`     - Shorten a URL
//! - `GET  /api/stats/{id}`   - Click statistics
//! - `GET  /health`           - Health check: store and click queue
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging (toggleable)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes, without path normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_logging` - installs the per-request tracing layer when `true`
pub fn router(state: AppState, request_logging: bool) -> Router {
    let router = Router::new()
        .route("/r/{id}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state);

    if request_logging {
        router.layer(tracing::layer())
    } else {
        router
    }
}

/// Constructs the application router with trailing slashes trimmed.
pub fn app_router(state: AppState, request_logging: bool) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_logging))
}
