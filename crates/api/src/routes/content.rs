use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Inscription content proxy, mounted at the root.
///
/// ```text
/// GET    /content/{inscription_id}   -> serve_inscription_content
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/content/{inscription_id}",
        get(content::serve_inscription_content),
    )
}
