//! Normalized inscription record.
//!
//! This is the shape persisted in the metadata document, cached per address,
//! and handed to the browser. Provenance fields are informational only.

use serde::{Deserialize, Serialize};

use crate::lenient;

/// Substrings of a lowercased content type that mark a displayable image.
const IMAGE_CONTENT_MARKERS: [&str; 2] = ["image", "svg"];

/// A single inscription as stored and served by Ordinal Frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inscription {
    pub id: String,
    pub number: i64,
    pub address: String,
    pub content_type: String,
    pub content_length: u64,
    /// Built from the upstream base URL and `id`, never taken from upstream.
    pub content_url: String,
    pub timestamp: i64,
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub sat_ordinal: Option<String>,
    pub sat_rarity: String,
    #[serde(deserialize_with = "lenient::string_or_number_or_zero")]
    pub fee: String,
    #[serde(deserialize_with = "lenient::string_or_number_or_zero")]
    pub value: String,
    pub block_height: u64,
    pub tx_id: String,
    pub collection_slug: Option<String>,
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl Default for Inscription {
    fn default() -> Self {
        Self {
            id: String::new(),
            number: 0,
            address: String::new(),
            content_type: "unknown".to_string(),
            content_length: 0,
            content_url: String::new(),
            timestamp: 0,
            sat_ordinal: None,
            sat_rarity: "common".to_string(),
            fee: "0".to_string(),
            value: "0".to_string(),
            block_height: 0,
            tx_id: String::new(),
            collection_slug: None,
            metadata: serde_json::Map::new(),
        }
    }
}

impl Inscription {
    /// Whether this inscription can be shown in the frame.
    pub fn is_image(&self) -> bool {
        is_image_content_type(&self.content_type)
    }
}

/// Case-insensitive check for "image" or "svg" in a MIME type.
pub fn is_image_content_type(content_type: &str) -> bool {
    let lowered = content_type.to_lowercase();
    IMAGE_CONTENT_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Keep only image inscriptions, preserving order.
pub fn filter_images(inscriptions: &[Inscription]) -> Vec<Inscription> {
    inscriptions
        .iter()
        .filter(|i| i.is_image())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_type(id: &str, content_type: &str) -> Inscription {
        Inscription {
            id: id.to_string(),
            content_type: content_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn image_types_are_detected() {
        assert!(is_image_content_type("image/png"));
        assert!(is_image_content_type("image/svg+xml"));
        assert!(is_image_content_type("IMAGE/WEBP"));
        assert!(is_image_content_type("text/svg"));
    }

    #[test]
    fn non_image_types_are_rejected() {
        assert!(!is_image_content_type("text/plain;charset=utf-8"));
        assert!(!is_image_content_type("application/json"));
        assert!(!is_image_content_type("unknown"));
        assert!(!is_image_content_type(""));
    }

    #[test]
    fn filter_keeps_order_and_drops_text() {
        let all = vec![
            with_type("a", "image/png"),
            with_type("b", "text/plain"),
            with_type("c", "image/gif"),
        ];
        let ids: Vec<_> = filter_images(&all).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn deserializes_partial_record_with_defaults() {
        let parsed: Inscription = serde_json::from_str(r#"{"id":"abci0"}"#).unwrap();
        assert_eq!(parsed.id, "abci0");
        assert_eq!(parsed.content_type, "unknown");
        assert_eq!(parsed.sat_rarity, "common");
        assert!(parsed.metadata.is_empty());
    }

    #[test]
    fn numeric_provenance_fields_are_stringified() {
        let parsed: Inscription = serde_json::from_str(
            r#"{"id":"abci0","fee":0,"value":546,"sat_ordinal":1234567890}"#,
        )
        .unwrap();
        assert_eq!(parsed.fee, "0");
        assert_eq!(parsed.value, "546");
        assert_eq!(parsed.sat_ordinal.as_deref(), Some("1234567890"));
    }
}
