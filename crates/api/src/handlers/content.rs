//! Pass-through of inscription content from the inscriptions index.

use axum::extract::{Path, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::state::AppState;

/// Browsers may keep proxied content for 24 hours.
pub const CONTENT_CACHE_CONTROL: &str = "public, max-age=86400";

/// GET /content/{inscription_id}
///
/// Fetches the content uncached and forwards status, content type, and
/// bytes. Any failure becomes a 404 with a generic body; the upstream error
/// is only logged.
pub async fn serve_inscription_content(
    State(state): State<AppState>,
    Path(inscription_id): Path<String>,
) -> Response {
    match state.inscriptions.fetch_content(&inscription_id).await {
        Ok(content) => {
            let status = StatusCode::from_u16(content.status).unwrap_or(StatusCode::OK);
            (
                status,
                [
                    (CONTENT_TYPE, content.content_type),
                    (CACHE_CONTROL, CONTENT_CACHE_CONTROL.to_string()),
                ],
                content.body,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(
                inscription_id = %inscription_id,
                error = %e,
                "Error serving inscription content",
            );
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Content not found" })),
            )
                .into_response()
        }
    }
}
