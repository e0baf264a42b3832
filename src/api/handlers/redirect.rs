//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::api::dto::link_headers::LinkHeaders;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its destination.
///
/// # Endpoint
///
/// `GET /r/{id}`
///
/// # Click Tracking
///
/// The click is handed to the background worker only once the redirect
/// response is ready, so counting never delays or fails the redirect.
///
/// # Errors
///
/// Returns 404 Not Found if the id doesn't exist.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let entry = state.repository.get(&id).await?;

    let headers = LinkHeaders::redirect(&entry.destination).into_header_map()?;

    state.repository.submit_click(&entry.id);

    Ok((StatusCode::MOVED_PERMANENTLY, headers))
}
