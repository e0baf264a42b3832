//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click count of a short link.
///
/// # Endpoint
///
/// `GET /api/stats/{id}`
///
/// # Response
///
/// ```json
/// { "clicks": 3 }
/// ```
///
/// Clicks still waiting in the queue are not counted yet.
///
/// # Errors
///
/// Returns 404 Not Found if the id doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.repository.stats(&id).await?;

    Ok(Json(stats.into()))
}
