use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ordinal_frame_core::inscription::Inscription;
use ordinal_frame_core::lenient;

/// Slideshow interval used when nothing else is configured.
pub const DEFAULT_SLIDESHOW_INTERVAL_SECS: u64 = 30;

/// `ordinals.json`: the most recent fetch, fully replaced each time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataDocument {
    /// Image inscriptions only.
    pub ordinals: Vec<Inscription>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub last_updated: Option<DateTime<Utc>>,
    pub address: Option<String>,
    /// Inscriptions fetched before the image filter.
    pub total_count: usize,
    pub image_count: usize,
}

/// `selection.json`: the user's slideshow picks.
///
/// `selected_ids` may name inscriptions no longer in the metadata document
/// after a fetch for a different address; such ids are simply skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionDocument {
    pub selected_ids: Vec<String>,
    pub slideshow_interval: u64,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Default for SelectionDocument {
    fn default() -> Self {
        Self::with_interval(DEFAULT_SLIDESHOW_INTERVAL_SECS)
    }
}

impl SelectionDocument {
    pub fn with_interval(slideshow_interval: u64) -> Self {
        Self {
            selected_ids: Vec::new(),
            slideshow_interval,
            last_updated: None,
        }
    }
}

/// `selection.json` as read from disk. A missing interval is filled in from
/// configuration by [`StoredSelection::into_document`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct StoredSelection {
    selected_ids: Vec<String>,
    slideshow_interval: Option<u64>,
    #[serde(deserialize_with = "lenient::timestamp")]
    last_updated: Option<DateTime<Utc>>,
}

impl StoredSelection {
    pub(crate) fn into_document(self, default_interval: u64) -> SelectionDocument {
        SelectionDocument {
            selected_ids: self.selected_ids,
            slideshow_interval: self.slideshow_interval.unwrap_or(default_interval),
            last_updated: self.last_updated,
        }
    }
}
