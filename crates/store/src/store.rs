//! The Ordinals store: fetch-and-persist, selection updates, and the
//! selected-ordinals view.
//!
//! Each document sits behind its own [`RwLock`]. Writers hold the write lock
//! across build → persist → commit, and the in-memory copy only changes once
//! the file write succeeded, so concurrent requests cannot lose updates or
//! leave memory and disk out of step.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use ordinal_frame_core::error::CoreError;
use ordinal_frame_core::fs::{read_json, write_json_atomic};
use ordinal_frame_core::inscription::{filter_images, Inscription};

use crate::documents::{MetadataDocument, SelectionDocument, StoredSelection};
use crate::source::InscriptionSource;

/// File name of the metadata document.
pub const METADATA_FILE_NAME: &str = "ordinals.json";

/// File name of the selection document.
pub const SELECTION_FILE_NAME: &str = "selection.json";

/// Where the two documents live on disk.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub metadata_file: PathBuf,
    pub selection_file: PathBuf,
}

impl StorePaths {
    /// `dir/ordinals.json` and `dir/selection.json`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            metadata_file: dir.join(METADATA_FILE_NAME),
            selection_file: dir.join(SELECTION_FILE_NAME),
        }
    }
}

/// Summary returned by [`OrdinalsStore::fetch_address_ordinals`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchOutcome {
    pub success: bool,
    pub message: String,
    pub ordinals: Vec<Inscription>,
    pub total_count: usize,
    pub image_count: usize,
}

impl FetchOutcome {
    fn success(ordinals: Vec<Inscription>, total_count: usize) -> Self {
        let image_count = ordinals.len();
        Self {
            success: true,
            message: format!("Found {image_count} image inscriptions"),
            ordinals,
            total_count,
            image_count,
        }
    }

    fn failure(message: String) -> Self {
        Self {
            success: false,
            message,
            ordinals: Vec::new(),
            total_count: 0,
            image_count: 0,
        }
    }
}

/// Owner of the metadata and selection documents.
pub struct OrdinalsStore<S> {
    source: S,
    paths: StorePaths,
    metadata: RwLock<MetadataDocument>,
    selection: RwLock<SelectionDocument>,
}

impl<S: InscriptionSource> OrdinalsStore<S> {
    /// Load both documents, substituting defaults for missing or unreadable
    /// files. A fresh selection uses `default_interval` seconds.
    pub async fn open(
        source: S,
        paths: StorePaths,
        default_interval: u64,
    ) -> Result<Self, CoreError> {
        for file in [&paths.metadata_file, &paths.selection_file] {
            if let Some(parent) = file.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let metadata = load_or_default(&paths.metadata_file, MetadataDocument::default).await;
        let selection = load_or_default(&paths.selection_file, StoredSelection::default)
            .await
            .into_document(default_interval);

        tracing::info!(
            ordinals = metadata.ordinals.len(),
            selected = selection.selected_ids.len(),
            "Ordinals store loaded",
        );

        Ok(Self {
            source,
            paths,
            metadata: RwLock::new(metadata),
            selection: RwLock::new(selection),
        })
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Fetch inscriptions for `address`, keep the images, and replace the
    /// metadata document.
    ///
    /// Never fails: upstream and persistence errors are logged and reported
    /// as `success: false` with an empty list, leaving the previous document
    /// in place.
    pub async fn fetch_address_ordinals(&self, address: &str) -> FetchOutcome {
        tracing::info!(address, "Fetching ordinals for address");

        let inscriptions = match self.source.fetch_address_inscriptions(address).await {
            Ok(inscriptions) => inscriptions,
            Err(e) => {
                tracing::error!(address, error = %e, "Error fetching ordinals");
                return FetchOutcome::failure(format!("Error fetching Ordinals: {e}"));
            }
        };

        let images = filter_images(&inscriptions);
        let document = MetadataDocument {
            ordinals: images.clone(),
            last_updated: Some(Utc::now()),
            address: Some(address.to_string()),
            total_count: inscriptions.len(),
            image_count: images.len(),
        };

        let mut metadata = self.metadata.write().await;
        if let Err(e) = write_json_atomic(&self.paths.metadata_file, &document).await {
            tracing::error!(
                path = %self.paths.metadata_file.display(),
                error = %e,
                "Error saving metadata",
            );
            return FetchOutcome::failure("Failed to save ordinals metadata".to_string());
        }
        *metadata = document;

        tracing::info!(
            address,
            total = inscriptions.len(),
            images = images.len(),
            "Ordinals metadata updated",
        );
        FetchOutcome::success(images, inscriptions.len())
    }

    /// Replace the selected ids, keeping the current slideshow interval.
    pub async fn update_selection(&self, selected_ids: Vec<String>) -> bool {
        self.update_selection_with_interval(selected_ids, None).await
    }

    /// Replace the selected ids and optionally the slideshow interval.
    ///
    /// Returns `false` if the document could not be written; the in-memory
    /// selection is then left unchanged.
    pub async fn update_selection_with_interval(
        &self,
        selected_ids: Vec<String>,
        slideshow_interval: Option<u64>,
    ) -> bool {
        let mut selection = self.selection.write().await;

        let updated = SelectionDocument {
            slideshow_interval: slideshow_interval.unwrap_or(selection.slideshow_interval),
            selected_ids,
            last_updated: Some(Utc::now()),
        };

        match write_json_atomic(&self.paths.selection_file, &updated).await {
            Ok(()) => {
                tracing::info!(
                    selected = updated.selected_ids.len(),
                    interval = updated.slideshow_interval,
                    "Updated selection",
                );
                *selection = updated;
                true
            }
            Err(e) => {
                tracing::error!(
                    path = %self.paths.selection_file.display(),
                    error = %e,
                    "Error updating selection",
                );
                false
            }
        }
    }

    /// Selected inscriptions in the user's chosen order.
    ///
    /// Ids missing from the metadata document are skipped and repeated ids
    /// appear once.
    pub async fn selected_ordinals(&self) -> Vec<Inscription> {
        let metadata = self.metadata.read().await;
        let selection = self.selection.read().await;

        let by_id: HashMap<&str, &Inscription> = metadata
            .ordinals
            .iter()
            .map(|o| (o.id.as_str(), o))
            .collect();

        let mut seen = HashSet::new();
        selection
            .selected_ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .filter_map(|id| by_id.get(id.as_str()).map(|o| (*o).clone()))
            .collect()
    }

    /// Snapshot of the metadata document.
    pub async fn metadata(&self) -> MetadataDocument {
        self.metadata.read().await.clone()
    }

    /// Snapshot of the selection document.
    pub async fn selection(&self) -> SelectionDocument {
        self.selection.read().await.clone()
    }
}

/// Read a document, falling back to `default` when it is absent or broken.
async fn load_or_default<T, F>(path: &Path, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match read_json(path).await {
        Ok(Some(doc)) => doc,
        Ok(None) => default(),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Error loading document, using defaults");
            default()
        }
    }
}
