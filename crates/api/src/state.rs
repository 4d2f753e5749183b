use std::sync::Arc;

use ordinal_frame_core::error::CoreError;
use ordinal_frame_inscriptions::api::InscriptionApi;
use ordinal_frame_inscriptions::cache::DiskCache;
use ordinal_frame_store::{OrdinalsStore, StorePaths};

use crate::config::ServerConfig;

/// The store as wired in the running server.
pub type FrameStore = OrdinalsStore<Arc<InscriptionApi>>;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Metadata and selection documents.
    pub store: Arc<FrameStore>,
    /// Client for the inscriptions index (also used by the content proxy).
    pub inscriptions: Arc<InscriptionApi>,
}

impl AppState {
    /// Build the disk cache, API client, and store from configuration.
    ///
    /// Creates the data directories if they do not exist yet.
    pub async fn from_config(config: ServerConfig) -> Result<Self, CoreError> {
        let cache = DiskCache::open(config.api_cache_dir()).await?;

        let inscriptions = InscriptionApi::new(&config.upstream, cache)
            .map_err(|e| CoreError::Internal(format!("failed to build inscriptions client: {e}")))?;
        let inscriptions = Arc::new(inscriptions);

        let store = OrdinalsStore::open(
            Arc::clone(&inscriptions),
            StorePaths::in_dir(&config.metadata_dir()),
            config.default_slideshow_interval,
        )
        .await?;

        Ok(Self {
            config: Arc::new(config),
            store: Arc::new(store),
            inscriptions,
        })
    }
}
