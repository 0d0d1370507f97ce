//! Browser tests for the bindings. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use address_wasm::codec::{bech32_decode, bech32_encode, to_checksum_address, validate_address};
use address_wasm::state::{AddressCheck, DecodedBech32};
use address_wasm::Codec;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const PUBKEY: &str = "03f349dec2b5205707c778534a7f134125ea31e82134e5aa987417f1091103e263";

#[wasm_bindgen_test]
fn encode_then_decode() {
    let encoded = bech32_encode("htdf", "800cd6f1392804f0dcd39ae0822d1170cf0f9455").unwrap();
    assert_eq!(encoded, "htdf1sqxddufe9qz0phxnntsgytg3wr8sl9z46edt9h");

    let decoded: DecodedBech32 = serde_wasm_bindgen::from_value(bech32_decode(&encoded).unwrap()).unwrap();
    assert_eq!(decoded.hrp, "htdf");
    assert_eq!(decoded.payload_hex.as_deref(), Some("800cd6f1392804f0dcd39ae0822d1170cf0f9455"));
}

#[wasm_bindgen_test]
fn decode_rejects_bad_checksum() {
    assert!(bech32_decode("htdf1sqxddufe9qz0phxnntsgytg3wr8sl9z46edt9q").is_err());
}

#[wasm_bindgen_test]
fn checksum_address() {
    assert_eq!(
        to_checksum_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap(),
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
    );
}

#[wasm_bindgen_test]
fn validate_modes() {
    let mixed = "0x5AAEB6053F3E94C9B9A09f33669435E7Ef1BeAed";

    let strict: AddressCheck = serde_wasm_bindgen::from_value(validate_address(mixed, false).unwrap()).unwrap();
    assert!(!strict.valid);

    let relaxed: AddressCheck = serde_wasm_bindgen::from_value(validate_address(mixed, true).unwrap()).unwrap();
    assert!(relaxed.valid);
}

#[wasm_bindgen_test]
fn codec_account_address() {
    let codec = Codec::new("htdf", false).unwrap();
    assert_eq!(codec.hrp().as_deref(), Some("htdf"));
    assert_eq!(
        codec.account_address(PUBKEY).unwrap(),
        "htdf1sqxddufe9qz0phxnntsgytg3wr8sl9z46edt9h"
    );

    let eth = Codec::new("eth", false).unwrap();
    assert!(eth.account_address(PUBKEY).is_err());
}
