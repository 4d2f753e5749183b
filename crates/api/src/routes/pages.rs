use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Browser page routes, mounted at the root.
///
/// ```text
/// GET    /         -> index
/// GET    /setup    -> setup
/// GET    /select   -> select
/// GET    /frame    -> frame (redirects to /setup when nothing is selected)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/setup", get(pages::setup))
        .route("/select", get(pages::select))
        .route("/frame", get(pages::frame))
}
