//! Bitcoin address shape validation.
//!
//! Classifies an address string by its prefix and length only. No Base58Check
//! or Bech32 checksum is verified and nothing here touches the network.

use serde::Serialize;

/// Error message for a missing or blank address.
pub const ADDRESS_REQUIRED: &str = "Address is required";

/// Error message for an address that matches no known shape.
pub const INVALID_ADDRESS_FORMAT: &str = "Invalid Bitcoin address format";

/// Accepted length range for legacy (P2PKH / P2SH) addresses.
const LEGACY_LEN: std::ops::RangeInclusive<usize> = 25..=34;

/// Minimum length for `bc1` (Bech32 / Bech32m) addresses.
const BECH32_MIN_LEN: usize = 42;

/// Address family inferred from the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressType {
    /// `1...` (P2PKH) or `3...` (P2SH).
    Legacy,
    /// `bc1q...` native SegWit v0.
    SegwitV0,
    /// `bc1p...` Taproot (SegWit v1).
    Taproot,
    /// Any other `bc1...` address.
    Segwit,
    Invalid,
}

/// Result of [`validate_address`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressValidation {
    pub valid: bool,
    #[serde(rename = "type")]
    pub address_type: AddressType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AddressValidation {
    fn valid(address_type: AddressType) -> Self {
        Self {
            valid: true,
            address_type,
            error: None,
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            valid: false,
            address_type: AddressType::Invalid,
            error: Some(message.to_string()),
        }
    }
}

/// Classify a Bitcoin address by shape.
///
/// Rules, first match wins:
///
/// 1. blank → invalid, "Address is required"
/// 2. `1`/`3` prefix with 25..=34 characters → legacy
/// 3. `bc1` prefix with at least 42 characters → `bc1q` segwit_v0,
///    `bc1p` taproot, otherwise segwit
/// 4. anything else → invalid, "Invalid Bitcoin address format"
///
/// Surrounding whitespace is ignored.
pub fn validate_address(address: &str) -> AddressValidation {
    let address = address.trim();
    if address.is_empty() {
        return AddressValidation::invalid(ADDRESS_REQUIRED);
    }

    let len = address.chars().count();

    if address.starts_with('1') || address.starts_with('3') {
        if LEGACY_LEN.contains(&len) {
            return AddressValidation::valid(AddressType::Legacy);
        }
    } else if address.starts_with("bc1") && len >= BECH32_MIN_LEN {
        let address_type = if address.starts_with("bc1q") {
            AddressType::SegwitV0
        } else if address.starts_with("bc1p") {
            AddressType::Taproot
        } else {
            AddressType::Segwit
        };
        return AddressValidation::valid(address_type);
    }

    AddressValidation::invalid(INVALID_ADDRESS_FORMAT)
}
