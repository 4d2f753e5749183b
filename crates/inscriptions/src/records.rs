//! Raw upstream records and their normalization into [`Inscription`].

use reqwest::Url;
use serde::Deserialize;

use ordinal_frame_core::inscription::Inscription;
use ordinal_frame_core::lenient::string_or_number;

/// One page of `GET /inscriptions?address&limit&offset`.
///
/// Records are kept as raw JSON so one malformed entry only drops itself.
#[derive(Debug, Default, Deserialize)]
pub struct InscriptionPage {
    #[serde(default)]
    pub results: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Upstream inscription record. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawInscription {
    pub id: Option<String>,
    pub number: Option<i64>,
    pub address: Option<String>,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub timestamp: Option<i64>,
    #[serde(deserialize_with = "string_or_number")]
    pub sat_ordinal: Option<String>,
    pub sat_rarity: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub fee: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub value: Option<String>,
    pub genesis_block_height: Option<u64>,
    pub genesis_tx_id: Option<String>,
    pub collection_slug: Option<String>,
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Append path segments to `base`, percent-encoding each one.
///
/// `base` must be able to carry a path; [`crate::api::InscriptionApi::new`]
/// rejects any other base URL.
pub fn endpoint_url<'a>(base: &Url, segments: impl IntoIterator<Item = &'a str>) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// Build the content URL for an inscription.
pub fn content_url(base: &Url, inscription_id: &str) -> Url {
    endpoint_url(base, ["inscriptions", inscription_id, "content"])
}

/// Normalize one raw record.
///
/// Returns `None` when the record has no `id` or does not decode; absent
/// fields fall back to benign defaults.
pub fn normalize_record(raw: serde_json::Value, base: &Url) -> Option<Inscription> {
    let raw: RawInscription = match serde_json::from_value(raw) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "Dropping undecodable inscription record");
            return None;
        }
    };

    let id = raw.id.filter(|id| !id.is_empty())?;
    let defaults = Inscription::default();

    Some(Inscription {
        content_url: content_url(base, &id).into(),
        number: raw.number.unwrap_or(defaults.number),
        address: raw.address.unwrap_or(defaults.address),
        content_type: raw.content_type.unwrap_or(defaults.content_type),
        content_length: raw.content_length.unwrap_or(defaults.content_length),
        timestamp: raw.timestamp.unwrap_or(defaults.timestamp),
        sat_ordinal: raw.sat_ordinal,
        sat_rarity: raw.sat_rarity.unwrap_or(defaults.sat_rarity),
        fee: raw.fee.unwrap_or(defaults.fee),
        value: raw.value.unwrap_or(defaults.value),
        block_height: raw.genesis_block_height.unwrap_or(defaults.block_height),
        tx_id: raw.genesis_tx_id.unwrap_or(defaults.tx_id),
        collection_slug: raw.collection_slug,
        metadata: raw.metadata.unwrap_or(defaults.metadata),
        id,
    })
}

/// Normalize a batch, silently skipping records without an id.
pub fn normalize_records(
    raw: impl IntoIterator<Item = serde_json::Value>,
    base: &Url,
) -> Vec<Inscription> {
    raw.into_iter()
        .filter_map(|record| normalize_record(record, base))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn base() -> Url {
        Url::parse("https://api.example.com/ordinals/v1").unwrap()
    }

    #[test]
    fn full_record_is_mapped() {
        let raw = json!({
            "id": "abc123i0",
            "number": 4242,
            "address": "bc1pxyz",
            "content_type": "image/png",
            "content_length": 512,
            "timestamp": 1_700_000_000_000_i64,
            "sat_ordinal": "1234567890",
            "sat_rarity": "uncommon",
            "fee": "3210",
            "value": "546",
            "genesis_block_height": 780_000,
            "genesis_tx_id": "abc123",
            "collection_slug": "frogs",
            "metadata": {"name": "Frog #1"},
            "content_url": "https://evil.example.com/ignored"
        });

        let inscription = normalize_record(raw, &base()).unwrap();

        assert_eq!(inscription.id, "abc123i0");
        assert_eq!(inscription.number, 4242);
        assert_eq!(inscription.content_type, "image/png");
        assert_eq!(inscription.block_height, 780_000);
        assert_eq!(inscription.tx_id, "abc123");
        assert_eq!(inscription.fee, "3210");
        assert_eq!(inscription.sat_ordinal.as_deref(), Some("1234567890"));
        assert_eq!(inscription.collection_slug.as_deref(), Some("frogs"));
        assert_eq!(inscription.metadata["name"], "Frog #1");
        assert_eq!(
            inscription.content_url,
            "https://api.example.com/ordinals/v1/inscriptions/abc123i0/content"
        );
    }

    #[test]
    fn missing_fields_get_defaults() {
        let inscription = normalize_record(json!({"id": "x"}), &base()).unwrap();

        assert_eq!(inscription.number, 0);
        assert_eq!(inscription.address, "");
        assert_eq!(inscription.content_type, "unknown");
        assert_eq!(inscription.sat_rarity, "common");
        assert_eq!(inscription.fee, "0");
        assert_eq!(inscription.value, "0");
        assert_eq!(inscription.sat_ordinal, None);
        assert!(inscription.metadata.is_empty());
    }

    #[test]
    fn numeric_fee_and_value_are_stringified() {
        let inscription =
            normalize_record(json!({"id": "x", "fee": 1500, "value": 10000}), &base()).unwrap();
        assert_eq!(inscription.fee, "1500");
        assert_eq!(inscription.value, "10000");
    }

    #[test]
    fn null_metadata_becomes_empty_map() {
        let inscription = normalize_record(json!({"id": "x", "metadata": null}), &base()).unwrap();
        assert!(inscription.metadata.is_empty());
    }

    #[test]
    fn record_without_id_is_dropped() {
        assert!(normalize_record(json!({"number": 1}), &base()).is_none());
        assert!(normalize_record(json!({"id": ""}), &base()).is_none());
    }

    #[test]
    fn undecodable_record_is_dropped() {
        assert!(normalize_record(json!({"id": "x", "number": "not a number"}), &base()).is_none());
        assert!(normalize_record(json!("just a string"), &base()).is_none());
    }

    #[test]
    fn batch_skips_bad_records_and_keeps_order() {
        let batch = vec![
            json!({"id": "a"}),
            json!({"number": 2}),
            json!({"id": "c"}),
        ];
        let ids: Vec<_> = normalize_records(batch, &base())
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn content_url_escapes_reserved_characters_in_id() {
        let url = content_url(&base(), "abc?x=1#frag/../admin");
        assert_eq!(
            url.as_str(),
            "https://api.example.com/ordinals/v1/inscriptions/abc%3Fx=1%23frag%2F..%2Fadmin/content"
        );
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn endpoint_url_handles_root_base() {
        let root = Url::parse("http://127.0.0.1:8080/").unwrap();
        assert_eq!(
            endpoint_url(&root, ["inscriptions"]).as_str(),
            "http://127.0.0.1:8080/inscriptions"
        );
    }

    #[test]
    fn page_without_results_decodes() {
        let page: InscriptionPage = serde_json::from_value(json!({"limit": 60})).unwrap();
        assert!(page.results.is_none());
    }
}
