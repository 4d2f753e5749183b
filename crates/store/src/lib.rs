//! Persisted Ordinal Frame state.
//!
//! Two JSON documents back the dashboard: the metadata document (the last
//! fetched image inscriptions and where they came from) and the selection
//! document (the ids chosen for the slideshow). [`store::OrdinalsStore`]
//! mediates every read and write of both.

pub mod documents;
pub mod source;
pub mod store;

pub use documents::{MetadataDocument, SelectionDocument};
pub use source::InscriptionSource;
pub use store::{FetchOutcome, OrdinalsStore, StorePaths};
