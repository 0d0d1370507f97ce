//! JavaScript-facing codec functions.

use wasm_bindgen::prelude::*;
use address_core::{account_address, bech32, Chain, ChecksumMode, HexAddress};
use crate::state::{AddressCheck, DecodedBech32};

/// Address formatter bound to one chain.
#[wasm_bindgen]
pub struct Codec {
    /// The chain addresses are formatted for.
    chain: Chain,
    /// Whether hex validation skips the case check.
    mode: ChecksumMode,
}

#[wasm_bindgen]
impl Codec {
    /// Create a codec for a chain.
    ///
    /// # Arguments
    /// * `chain` - "eth", "htdf", "usdp" or "het"
    /// * `ignore_checksum` - Accept hex addresses in any letter case
    #[wasm_bindgen(constructor)]
    pub fn new(chain: &str, ignore_checksum: bool) -> Result<Codec, JsValue> {
        let chain = Chain::from_str(chain)
            .ok_or_else(|| JsValue::from_str("Invalid chain"))?;

        let mode = if ignore_checksum {
            ChecksumMode::Ignore
        } else {
            ChecksumMode::Enforce
        };

        Ok(Codec { chain, mode })
    }

    /// Format the account address of a hex-encoded compressed public key.
    #[wasm_bindgen]
    pub fn account_address(&self, pubkey_hex: &str) -> Result<String, JsValue> {
        let pubkey = decode_hex(pubkey_hex)?;
        account_address(self.chain, &pubkey)
            .map_err(|e| JsValue::from_str(&format!("Invalid public key: {}", e)))
    }

    /// Encode hex bytes with this chain's Bech32 prefix.
    #[wasm_bindgen]
    pub fn encode(&self, bytes_hex: &str) -> Result<String, JsValue> {
        let hrp = self.chain.bech32_hrp()
            .ok_or_else(|| JsValue::from_str("Chain does not use Bech32"))?;
        bech32_encode(hrp, bytes_hex)
    }

    /// Validate a hex address using this codec's checksum mode.
    #[wasm_bindgen]
    pub fn validate(&self, address: &str) -> Result<JsValue, JsValue> {
        let check = AddressCheck::from_result(HexAddress::parse(address, self.mode));
        if !check.valid {
            console_log(&format!("rejected {} address {}", self.chain, address));
        }
        check.to_js()
    }

    /// Get the chain name.
    #[wasm_bindgen(getter)]
    pub fn chain(&self) -> String {
        self.chain.name().to_string()
    }

    /// Get the Bech32 prefix, if the chain has one.
    #[wasm_bindgen(getter)]
    pub fn hrp(&self) -> Option<String> {
        self.chain.bech32_hrp().map(|hrp| hrp.to_string())
    }
}

/// Encode hex bytes as a Bech32 string under `hrp`.
#[wasm_bindgen]
pub fn bech32_encode(hrp: &str, bytes_hex: &str) -> Result<String, JsValue> {
    let bytes = decode_hex(bytes_hex)?;
    bech32::encode_bytes(hrp, &bytes)
        .map_err(|e| JsValue::from_str(&format!("Invalid Bech32 input: {}", e)))
}

/// Decode a Bech32 string into `{ hrp, data, payloadHex }`.
#[wasm_bindgen]
pub fn bech32_decode(input: &str) -> Result<JsValue, JsValue> {
    let (hrp, data) = bech32::decode(input)
        .map_err(|e| JsValue::from_str(&format!("Invalid Bech32 string: {}", e)))?;
    DecodedBech32::new(hrp, data).to_js()
}

/// Format a hex address with its mixed-case checksum.
#[wasm_bindgen]
pub fn to_checksum_address(address: &str) -> Result<String, JsValue> {
    address_core::to_checksum_address(address)
        .map_err(|e| JsValue::from_str(&format!("Invalid address: {}", e)))
}

/// Validate a hex address into `{ valid, checksummed, error }`.
#[wasm_bindgen]
pub fn validate_address(address: &str, ignore_checksum: bool) -> Result<JsValue, JsValue> {
    let mode = if ignore_checksum {
        ChecksumMode::Ignore
    } else {
        ChecksumMode::Enforce
    };
    AddressCheck::from_result(HexAddress::parse(address, mode)).to_js()
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

fn decode_hex(input: &str) -> Result<Vec<u8>, JsValue> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    hex::decode(digits).map_err(|_| JsValue::from_str("Invalid hex"))
}
