//! Shared response envelope types for API handlers.
//!
//! JSON API responses carry a top-level `success` flag. Use these structs
//! instead of ad-hoc `serde_json::json!` bodies for consistent serialization.

use serde::Serialize;

use ordinal_frame_store::{MetadataDocument, SelectionDocument};

/// `{ "success": ..., "message": ... }`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Full dump of both persisted documents.
#[derive(Debug, Serialize)]
pub struct OrdinalsResponse {
    pub success: bool,
    pub metadata: MetadataDocument,
    pub selection: SelectionDocument,
}
