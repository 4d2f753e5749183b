pub mod content;
pub mod health;
pub mod ordinals;
pub mod pages;

use axum::Router;
use tower_http::timeout::TimeoutLayer;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                 service status and stored-state summary (GET)
/// /fetch-ordinals         fetch and store ordinals for an address (POST)
/// /update-selection       save the slideshow selection (POST)
/// /ordinals               dump metadata and selection documents (GET)
/// ```
///
/// `timeout` wraps every route except `/fetch-ordinals`, which must run until
/// its retries are exhausted.
pub fn api_routes(timeout: TimeoutLayer) -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(ordinals::router())
        .route_layer(timeout)
        .merge(ordinals::fetch_router())
}
