//! Result records handed to JavaScript.

use address_core::bech32::CHECKSUM_LENGTH;
use address_core::{convert_bits, AddressError, HexAddress};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// A decoded Bech32 string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedBech32 {
    /// Lowercase human-readable prefix.
    pub hrp: String,
    /// 5-bit data symbols, checksum excluded.
    pub data: Vec<u8>,
    /// The data regrouped into bytes, if it regroups without leftover bits.
    pub payload_hex: Option<String>,
}

impl DecodedBech32 {
    /// Build from the output of `bech32::decode` (checksum still attached).
    pub fn new(hrp: String, mut data: Vec<u8>) -> Self {
        data.truncate(data.len().saturating_sub(CHECKSUM_LENGTH));
        let payload_hex = convert_bits(&data, 5, 8, false).ok().map(hex::encode);

        DecodedBech32 {
            hrp,
            data,
            payload_hex,
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

/// Outcome of validating a hex address string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressCheck {
    /// Whether the string was accepted.
    pub valid: bool,
    /// The checksummed spelling, when accepted.
    pub checksummed: Option<String>,
    /// Why the string was rejected.
    pub error: Option<String>,
}

impl AddressCheck {
    /// Build from a parse result.
    pub fn from_result(result: Result<HexAddress, AddressError>) -> Self {
        match result {
            Ok(address) => AddressCheck {
                valid: true,
                checksummed: Some(address.to_checksum()),
                error: None,
            },
            Err(e) => AddressCheck {
                valid: false,
                checksummed: None,
                error: Some(e.to_string()),
            },
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}
