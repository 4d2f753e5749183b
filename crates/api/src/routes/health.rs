use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
    pub config: HealthConfig,
}

/// Configuration and state summary reported by the health check.
#[derive(Serialize)]
pub struct HealthConfig {
    pub debug: bool,
    pub cache_dir: String,
    /// Image inscriptions in the metadata document.
    pub ordinals_count: usize,
    /// Ids in the selection document, stale ones included.
    pub selected_count: usize,
}

/// GET /health -- returns service status and a summary of stored state.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let ordinals_count = state.store.metadata().await.ordinals.len();
    let selected_count = state.store.selection().await.selected_ids.len();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
        config: HealthConfig {
            debug: state.config.debug,
            cache_dir: state.config.cache_dir().display().to_string(),
            ordinals_count,
            selected_count,
        },
    })
}

/// Mount health check routes (nested under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
