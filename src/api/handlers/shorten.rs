//! Handler for link shortening endpoint.

use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::info;

use crate::api::dto::link_headers::LinkHeaders;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens the destination URL sent as the raw request body.
///
/// # Endpoint
///
/// `POST /api/encurtar`
///
/// # Response
///
/// No body. Headers:
///
/// - `Location: <base>/r/<id>`
/// - `Link: <<base>/api/stats/<id>>; rel="stats"`
///
/// # Response Codes
///
/// - **201 Created**: A new short link was created
/// - **200 OK**: The destination was already shortened; the existing id is returned
/// - **400 Bad Request**: Empty or whitespace-only body, or non UTF-8 body
/// - **405 Method Not Allowed**: Any method other than POST (with `Allow: POST`)
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let destination = std::str::from_utf8(&body).map_err(|e| {
        AppError::bad_request(
            "Request body must be valid UTF-8",
            json!({ "reason": e.to_string() }),
        )
    })?;

    let (entry, created) = state.repository.get_or_create(destination).await?;

    let short_url = state.short_url(&entry.id);
    let headers = LinkHeaders::shortened(&short_url, &state.stats_url(&entry.id));

    let status = if created {
        info!("URL {} shortened to {}", entry.destination, short_url);
        StatusCode::CREATED
    } else {
        info!("URL {} already shortened as {}", entry.destination, short_url);
        StatusCode::OK
    };

    Ok((status, headers, ()))
}
