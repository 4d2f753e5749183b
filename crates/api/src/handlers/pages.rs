//! Handlers for the browser-facing pages.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::error::AppResult;
use crate::pages;
use crate::state::AppState;

/// GET /
pub async fn index() -> Html<String> {
    Html(pages::index())
}

/// GET /setup
pub async fn setup() -> Html<String> {
    Html(pages::setup())
}

/// GET /select -- every stored image inscription plus the current picks.
pub async fn select(State(state): State<AppState>) -> AppResult<Html<String>> {
    let metadata = state.store.metadata().await;
    let selection = state.store.selection().await;
    Ok(Html(pages::select(
        &metadata.ordinals,
        &selection.selected_ids,
    )?))
}

/// GET /frame -- the slideshow, or a redirect to `/setup` when nothing
/// selected is available.
pub async fn frame(State(state): State<AppState>) -> AppResult<Response> {
    let selected = state.store.selected_ordinals().await;
    if selected.is_empty() {
        tracing::debug!("No ordinals selected, redirecting to setup");
        return Ok(Redirect::to("/setup").into_response());
    }

    let interval = state.store.selection().await.slideshow_interval;
    Ok(Html(pages::frame(&selected, interval)?).into_response())
}

/// Fallback for unknown routes.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(pages::not_found()))
}
