//! Route definitions for the ordinals JSON API.
//!
//! Mounted at `/api` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ordinals;
use crate::state::AppState;

/// Ordinals API routes subject to the inbound request timeout.
///
/// ```text
/// POST   /update-selection   -> update_selection
/// GET    /ordinals           -> get_ordinals
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/update-selection", post(ordinals::update_selection))
        .route("/ordinals", get(ordinals::get_ordinals))
}

/// The fetch route. It is bounded by the upstream timeout and retry ceiling
/// rather than the inbound request timeout.
///
/// ```text
/// POST   /fetch-ordinals     -> fetch_ordinals
/// ```
pub fn fetch_router() -> Router<AppState> {
    Router::new().route("/fetch-ordinals", post(ordinals::fetch_ordinals))
}
